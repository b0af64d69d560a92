use denoms::dynamic::{run, Scenario};

fn main() {
    env_logger::init();

    let report = run(&Scenario::default());
    println!("{report}");
}
