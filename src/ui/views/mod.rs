pub mod next_steps;
