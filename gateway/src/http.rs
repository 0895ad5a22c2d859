use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web::Data,
    App, HttpServer,
};
use answer_judge_core::database::convex::ConvexStore;
use answer_judge_core::executor::{ExecutorContext, ExecutorOptions};
use answer_judge_core::handler::configure_routes;
use answer_judge_core::model::kimi::KimiModel;
use answer_judge_core::model::minimax::MinimaxModel;
use answer_judge_core::model::{ChatModel, ProviderRegistry};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::{Config, ProvidersConfig, StoreConfig};
use crate::middleware::trace_logger::TraceLogger;

const CORS_MAX_AGE: usize = 3600;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum CorsOptions {
    Permissive,
    Custom(Vec<String>, usize),
}

impl CorsOptions {
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOptions::Permissive
        } else {
            CorsOptions::Custom(origins.to_vec(), CORS_MAX_AGE)
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Actix(#[from] std::io::Error),
    #[error("Failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub struct ApiServer {
    config: Config,
}

impl ApiServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn print_useful_info(&self) {
        println!("\nAnswer judge starting up:");
        println!(
            "   HTTP server ready at: \x1b[36mhttp://{}:{}\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!(
            "   Store: {}",
            self.config.store.url.as_deref().unwrap_or("<not configured>")
        );
        println!("\n\x1b[33mcurl -X POST \x1b[36mhttp://{}:{}/similarity\x1b[33m \\\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!("\x1b[33m  -H \x1b[32m\"Content-Type: application/json\"\x1b[33m \\\x1b[0m");
        println!(
            "\x1b[33m  -d\x1b[0m \x1b[32m'{{\"question_id\": \"<id>\", \"user_text\": \"...\", \"model\": \"kimi\"}}'\x1b[0m"
        );
        println!();
    }

    /// Builds the long-lived clients once; every worker shares them.
    fn build_context(
        store: &StoreConfig,
        providers: ProvidersConfig,
    ) -> Result<ExecutorContext, ServerError> {
        let timeout = Duration::from_secs(providers.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout + Duration::from_secs(5))
            .build()?;

        let store_url = match &store.url {
            Some(url) => url.clone(),
            None => {
                tracing::warn!("Store url is not configured, store calls will fail");
                String::new()
            }
        };
        let store = ConvexStore::new(store_url, http_client.clone());

        let models: Vec<Arc<dyn ChatModel>> = vec![
            Arc::new(KimiModel::new(providers.kimi, http_client.clone())),
            Arc::new(MinimaxModel::new(providers.minimax, http_client)),
        ];

        Ok(ExecutorContext::new(
            Arc::new(store),
            ProviderRegistry::new(models),
            ExecutorOptions {
                provider_timeout: timeout,
                ..Default::default()
            },
        ))
    }

    pub async fn start(
        mut self,
    ) -> Result<impl Future<Output = Result<(), ServerError>>, ServerError> {
        let providers = std::mem::take(&mut self.config.providers);
        let context = Data::new(Self::build_context(&self.config.store, providers)?);
        let cors = CorsOptions::from_origins(&self.config.http.cors_allowed_origins);

        let server = HttpServer::new(move || {
            Self::create_app_entry(Self::get_cors(cors.clone()), context.clone())
        })
        .bind((self.config.http.host.as_str(), self.config.http.port))?
        .run();

        self.print_useful_info();

        Ok(async move { server.await.map_err(ServerError::Actix) })
    }

    fn create_app_entry(
        cors: Cors,
        context: Data<ExecutorContext>,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = actix_web::Error,
        >,
    > {
        App::new()
            .app_data(context)
            .configure(configure_routes)
            .wrap(TraceLogger)
            .wrap(cors)
    }

    fn get_cors(cors: CorsOptions) -> Cors {
        match cors {
            CorsOptions::Permissive => Cors::permissive(),
            CorsOptions::Custom(origins, max_age) => origins
                .into_iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin))
                .allow_any_method()
                .allow_any_header()
                .max_age(max_age),
        }
    }
}
