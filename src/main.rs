use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

use recipe_assistant::{AppConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let mut session = Session::new(config, StdRng::from_entropy());

    let stdin = io::stdin();
    session.run(&mut stdin.lock(), &mut io::stdout())?;

    Ok(())
}
