//! Built-in commands.
//!
//! These are registered in every session.

mod about;
mod alias;
mod cat;
mod cd;
mod echo;
mod env;
mod help;
mod history;
mod ls;
mod mkdirp;
mod potato;
mod pwd;
mod rm;
mod set;
mod sleep;
mod write;

use super::CommandRegistry;
use crate::error::ShellResult;

/// Register all built-in commands with the registry.
pub fn register_builtins(registry: &mut CommandRegistry) -> ShellResult<()> {
    registry.register("about", about::About)?;
    registry.register("alias", alias::Alias)?;
    registry.register("cat", cat::Cat)?;
    registry.register("cd", cd::Cd)?;
    registry.register("echo", echo::Echo)?;
    registry.register("env", env::Env)?;
    registry.register("help", help::Help)?;
    registry.register("history", history::HistoryCommand)?;
    registry.register("ls", ls::Ls)?;
    registry.register("mkdirp", mkdirp::Mkdirp)?;
    registry.register("potato", potato::Potato)?;
    registry.register("pwd", pwd::Pwd)?;
    registry.register("rm", rm::Rm)?;
    registry.register("set", set::Set)?;
    registry.register("sleep", sleep::Sleep)?;
    registry.register("write", write::Write)?;
    Ok(())
}
