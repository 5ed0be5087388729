use crate::app::Presenter;
use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_model::Route;
use crate::form::SubmissionController;
use crate::logger::*;
use crate::settings::Settings;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub controller: Arc<SubmissionController>,
    pub navigator: Arc<HistoryNavigator>,
    presenter_handle: Mutex<Option<JoinHandle<()>>>,
    cancel: CancellationToken,
}

impl App {
    /// Builds the collaborators named in `settings` and starts the presenter.
    /// Must be called inside a tokio runtime.
    pub fn try_new(settings: &Settings, view: Arc<dyn FormView>) -> anyhow::Result<Self> {
        let auth_client: Arc<dyn AuthClient> = match settings.auth.backend.as_str() {
            "fake" => Arc::new(FakeAuthClient::new()),
            "http" => {
                let client = HttpAuthClient::new(HttpAuthConfig {
                    base_url: settings.auth.base_url.clone(),
                    login_path: settings.auth.login_path.clone(),
                    timeout: settings.auth.timeout(),
                })?;
                info!(url = client.url(), "using http auth backend");
                Arc::new(client)
            }
            other => return Err(anyhow::anyhow!("Unknown auth backend: {}", other)),
        };

        let navigator = Arc::new(HistoryNavigator::new());
        let controller = Arc::new(SubmissionController::new(
            auth_client,
            navigator.clone(),
            Route(settings.navigation.destination.clone()),
        ));

        let cancel = CancellationToken::new();
        let presenter = Presenter::new(
            view,
            controller.clone(),
            settings.notification.auto_dismiss(),
            cancel.clone(),
        );
        let presenter_handle = tokio::spawn(presenter.run());

        info!(backend = %settings.auth.backend, "sign-in form ready");

        Ok(Self {
            controller,
            navigator,
            presenter_handle: Mutex::new(Some(presenter_handle)),
            cancel,
        })
    }

    pub async fn shutdown(&self) {
        self.cancel.cancel();

        let handle = self.presenter_handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!("presenter task failed: {e}");
            }
        }
        debug!("sign-in form shut down");
    }
}
