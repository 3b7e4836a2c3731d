use std::io;

use salesbook_console::Console;

fn main() -> anyhow::Result<()> {
    salesbook_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run()?;

    Ok(())
}
