use super::*;
use clap::Parser;
use roster_dto::MemberView;
use std::io::Write;

/// Interactive loop over the member API.
pub struct Console {
    client: Client,
    members: Vec<MemberView>,
    form: Form,
}

impl From<Client> for Console {
    fn from(client: Client) -> Self {
        Self {
            client,
            members: Vec::new(),
            form: Form::default(),
        }
    }
}

fn resolve<'a>(members: &'a [MemberView], key: &str) -> Result<&'a MemberView, ConsoleError> {
    members
        .iter()
        .find(|m| m.id == key || m.username == key)
        .ok_or_else(|| ConsoleError::Unknown(key.to_string()))
}

fn row(member: &MemberView) -> String {
    format!(
        " - {:<24} {}  created {}  updated {}  ({})",
        member.username,
        member.password,
        member.created_at.format("%Y-%m-%d %H:%M"),
        member.updated_at.format("%Y-%m-%d %H:%M"),
        member.id,
    )
}

impl Console {
    pub fn members(&self) -> &[MemberView] {
        &self.members
    }
    pub fn form(&self) -> &Form {
        &self.form
    }

    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        log::info!("entering console");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            if input.trim().is_empty() {
                continue;
            }
            match Command::try_parse_from(std::iter::once("> ").chain(input.split_whitespace())) {
                Ok(Command::Quit) => break,
                Ok(command) => match self.handle(command).await {
                    Ok(notice) => println!("{}", notice),
                    Err(e) => println!("{}", Notice::from(&e)),
                },
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), ConsoleError> {
        self.members = self.client.members().await?;
        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> Result<Notice, ConsoleError> {
        match command {
            Command::Login { username, password } => {
                self.client.login(&username, &password).await?;
                self.refresh().await?;
                Ok(Notice::success(format!("Logged in as {}", username)))
            }
            Command::Logout => {
                self.client.logout().await?;
                self.members.clear();
                self.form = Form::default();
                Ok(Notice::success("Logged out"))
            }
            Command::List { term } => {
                self.refresh().await?;
                let shown = filter(&self.members, term.as_deref().unwrap_or_default());
                shown.iter().for_each(|m| println!("{}", row(m)));
                Ok(Notice::info(format!(
                    "{} of {} member(s)",
                    shown.len(),
                    self.members.len()
                )))
            }
            Command::Add { username, password } => {
                self.form.fill(&username, password.as_deref().unwrap_or_default());
                let outcome = match self.form.submit(&self.members)? {
                    Submission::Create(req) => self
                        .client
                        .create(&req)
                        .await
                        .map(|m| format!("Added {}", m.username)),
                    Submission::Update(id, req) => self
                        .client
                        .update(&id, &req)
                        .await
                        .map(|m| format!("Updated {}", m.username)),
                };
                self.form.settle(outcome.is_ok());
                let message = outcome?;
                self.refresh().await?;
                Ok(Notice::success(message))
            }
            Command::Edit { member } => {
                self.refresh().await?;
                let member = resolve(&self.members, &member)?;
                self.form.edit(member);
                Ok(Notice::info(format!(
                    "Editing {}; `save <username> [password]` to apply, a blank password keeps the current one",
                    member.username
                )))
            }
            Command::Cancel => {
                self.form.cancel();
                Ok(Notice::info("Edit cancelled"))
            }
            Command::Delete { member } => {
                self.refresh().await?;
                let id = resolve(&self.members, &member)?.id.clone();
                let message = self.client.delete(&id).await?;
                if self.form.editing() == Some(id.as_str()) {
                    self.form.cancel();
                }
                self.refresh().await?;
                Ok(Notice::success(message))
            }
            Command::Quit => Ok(Notice::info("Goodbye")),
        }
    }
}
