use printlines::PrintLines;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd: PrintLines = argh::from_env();
    let code = cmd.execute(&mut io::stdout().lock())?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
