//! about — Print the system banner.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;
use crate::format::table;
use crate::kernel::OSID;

pub struct About;

#[async_trait]
impl CommandExecutor for About {
    fn short_description(&self) -> Option<&str> {
        Some("About this project")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        ctx.println(OSID);
        ctx.println(&"═".repeat(80));
        ctx.println(&table(
            &[
                ["Source code", "https://github.com/dgrundel/PotatOS"],
                ["Terminal support", "Anything that renders UTF-8."],
            ],
            4,
        ));
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelConfig, ShellState};
    use crate::output::BufferedOutput;

    #[tokio::test]
    async fn test_about() {
        let mut state = ShellState::new(&KernelConfig::bare()).unwrap();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("about", "", &mut state, &out);

        assert_eq!(About.invoke(&mut ctx).await.unwrap(), 0);
        let lines = out.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].text().starts_with("🥔 PotatOS"));
        assert_eq!(lines[1].text().chars().count(), 80);
        assert!(lines[2].text().starts_with("Source code         https://"));
    }
}
