mod args;
mod entry;
mod logger;
mod shutdown_handlers;

use resprobe::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
