use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Member administration console")]
pub enum Command {
    #[command(about = "Log in as an administrator")]
    Login {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        password: String,
    },
    #[command(about = "End the session")]
    Logout,
    #[command(about = "List members, optionally filtered by username", alias = "ls")]
    List { term: Option<String> },
    #[command(
        about = "Submit the form: add a member, or save the one being edited",
        alias = "save"
    )]
    Add {
        #[arg(required = true)]
        username: String,
        password: Option<String>,
    },
    #[command(about = "Edit a member, by username or id")]
    Edit {
        #[arg(required = true)]
        member: String,
    },
    #[command(about = "Leave edit mode")]
    Cancel,
    #[command(about = "Delete a member, by username or id", alias = "rm")]
    Delete {
        #[arg(required = true)]
        member: String,
    },
    #[command(about = "Leave the console", alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, clap::Error> {
        Command::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }

    #[test]
    fn parses_commands() {
        assert!(matches!(parse("ls"), Ok(Command::List { term: None })));
        assert!(matches!(parse("list ali"), Ok(Command::List { term: Some(_) })));
        assert!(matches!(
            parse("save alicia"),
            Ok(Command::Add { password: None, .. })
        ));
        assert!(matches!(parse("exit"), Ok(Command::Quit)));
        assert!(parse("login root").is_err());
        assert!(parse("dance").is_err());
    }
}
