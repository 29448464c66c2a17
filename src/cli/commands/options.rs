use super::CommandHandler;
use crate::quiz::options::groups_for;
use crate::quiz::Step;
use crate::Result;

/// Handler for the `options` command
pub struct OptionsCommand;

impl CommandHandler for OptionsCommand {
    fn execute(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "options"
    }
}

impl OptionsCommand {
    /// Listing of every choice question, grouped by step
    pub fn render(&self) -> String {
        let mut out = String::new();
        for step in Step::ALL {
            let groups = groups_for(step);
            if groups.is_empty() {
                continue;
            }
            out.push_str(&format!("[{}]\n", step));
            for group in groups {
                out.push_str(&format!("  {} ({})\n", group.prompt, group.field));
                for (index, option) in group.options.iter().enumerate() {
                    out.push_str(&format!("    {}. {}\n", index + 1, option));
                }
            }
        }
        out
    }
}
