use std::path::Path;

use anyhow::{bail, Result};

use crate::{
    api::client::AnswerServiceClient,
    cli::{Cli, Command},
    domain::events::ServiceHealth,
    ui,
    usecases::{
        bootstrap,
        probe_health::probe_health,
        submit_question::{build_request, AnswerSource, SubmissionPolicy},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => run_shell(cli.config.as_deref()),
        Command::Ask { question, username } => {
            run_ask(cli.config.as_deref(), &question, username.as_deref())
        }
        Command::Health => run_health(cli.config.as_deref()),
    }
}

fn run_shell(config_path: Option<&Path>) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(config_path)?;
    let mut composition = bootstrap::compose_shell(&context)?;

    ui::shell::start(&mut composition.event_source, &mut composition.orchestrator)
}

fn run_ask(config_path: Option<&Path>, question: &str, username: Option<&str>) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(config_path)?;

    let policy = SubmissionPolicy {
        require_username: context.config.service.require_username,
    };
    let request = match build_request(question, username.unwrap_or(""), policy) {
        Ok(request) => request,
        Err(error) => bail!("{}", error.user_message()),
    };

    let client = AnswerServiceClient::new(&context.config.service)?;
    match client.ask(&request) {
        Ok(answer) => {
            println!("{}", answer.answer);
            Ok(())
        }
        Err(error) => {
            let failure = crate::usecases::submit_question::map_source_error(error);
            bail!("{}", failure.user_message())
        }
    }
}

fn run_health(config_path: Option<&Path>) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(config_path)?;
    let client = AnswerServiceClient::new(&context.config.service)?;

    match probe_health(&client) {
        ServiceHealth::Available => {
            println!("Answer service at {} is available.", client.base_url());
            Ok(())
        }
        _ => bail!(
            "Answer service at {} appears unavailable.",
            client.base_url()
        ),
    }
}
