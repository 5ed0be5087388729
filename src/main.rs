use signin_form::app::App;
use signin_form::application_impl::ConsoleView;
use signin_form::domain_model::{Settlement, SubmitStatus};
use signin_form::logger::*;
use signin_form::settings::*;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    debug!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let app = App::try_new(&project_settings, Arc::new(ConsoleView::stdout()))?;
    let form = &app.controller;

    form.set_field("email", cli.email.into())?;
    form.set_field("password", cli.password.into())?;
    form.set_field("rememberMe", cli.remember_me.into())?;
    if cli.show_password {
        form.toggle_password_visibility();
    }

    let missing = form.credentials().missing_required();
    if !missing.is_empty() {
        app.shutdown().await;
        let names: Vec<&str> = missing.iter().map(|field| field.name()).collect();
        eprintln!("missing required field(s): {}", names.join(", "));
        return Ok(ExitCode::from(64));
    }

    let status = form.submit().await;
    app.shutdown().await;

    let code = match status {
        SubmitStatus::Settled(Settlement::SignedIn) => {
            if let Some(route) = app.navigator.current() {
                println!("-> {route}");
            }
            ExitCode::SUCCESS
        }
        SubmitStatus::Settled(Settlement::Rejected { .. }) => ExitCode::from(1),
        SubmitStatus::Settled(Settlement::Unreachable) => ExitCode::from(2),
        SubmitStatus::Dropped => {
            warn!("submission dropped");
            ExitCode::from(3)
        }
    };
    Ok(code)
}
