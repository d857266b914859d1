//! Interactive console front end over a process-local inventory ledger.

mod menu;
mod prompts;
mod render;

fn main() -> anyhow::Result<()> {
    menu::run()
}
