/// Follow-up instructions printed after a flavour has been patched in.
pub fn render_next_steps(flavour: &str) -> String {
    let rules = "skipabi=true skipmodule=true fakeroot debian/rules";
    let mut out = String::new();
    out.push_str("all patching done\n");
    out.push_str("you can now e.g. commit the changes:\n\n");
    out.push_str("  git add .\n");
    out.push_str(&format!("  git commit -a -m \"{} modifications\"\n\n", flavour));
    out.push_str("then build them:\n\n");
    out.push_str(&format!("  {} binary-indep\n", rules));
    out.push_str(&format!("  {} binary-perarch\n", rules));
    out.push_str(&format!("  {} binary-{}\n\n", rules, flavour));
    out.push_str("if you want to create a debug package you can do it this way:\n\n");
    // skipdbg is a make override, not an environment variable
    out.push_str(&format!("  {} binary-{} skipdbg=false\n", rules, flavour));
    out
}
