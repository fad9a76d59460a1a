//! help — List commands, or show a command's usage.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::env::TAB;
use crate::error::ShellResult;
use crate::format::table;

pub struct Help;

#[async_trait]
impl CommandExecutor for Help {
    fn short_description(&self) -> Option<&str> {
        Some("Prints this message")
    }

    fn help(&self) -> Option<&str> {
        Some("Usage:\n  help [command?]\n\nLists available commands, or explains one of them.")
    }

    fn immutable(&self) -> bool {
        true
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        if !ctx.args.is_empty() {
            match ctx.state.commands.get(&ctx.args) {
                Some(command) => match command.help() {
                    Some(help) => ctx.println(help),
                    None => ctx.printerr(&format!(
                        "Command \"{}\" has not provided additional help info.",
                        ctx.args
                    )),
                },
                None => ctx.printerr(&format!("Unknown command \"{}\".", ctx.args)),
            }
            return Ok(0);
        }

        let tab = ctx.env().get(TAB);
        let commands = &ctx.state.commands;
        let rows: Vec<[String; 2]> = commands
            .names()
            .into_iter()
            .filter_map(|name| {
                let command = commands.get(name)?;
                let description = command.short_description()?;
                Some([format!("{tab}{name}"), description.to_string()])
            })
            .collect();

        ctx.println("Use \"help [command]\" to get more info on a specific command.\n");
        ctx.println("Available commands:\n");
        ctx.println(&table(&rows, 2));
        Ok(0)
    }
}
