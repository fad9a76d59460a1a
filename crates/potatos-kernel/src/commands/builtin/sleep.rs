//! sleep — Suspend for a number of seconds.

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Sleep;

#[async_trait]
impl CommandExecutor for Sleep {
    fn short_description(&self) -> Option<&str> {
        Some("Wait a while")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let seconds: f64 = ctx.args.parse().unwrap_or(0.0);
        if seconds > 0.0 {
            let duration = Duration::try_from_secs_f64(seconds)
                .map_err(|_| anyhow!("cannot sleep for {seconds} seconds"))?;
            ctx.println(&format!("Sleeping for {seconds} seconds."));
            tokio::time::sleep(duration).await;
        }
        Ok(0)
    }
}
