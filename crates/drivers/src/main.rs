mod config;
mod http;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::AppConfig;
use wedding_gallery_adapters::{
    present_gallery_json, present_gallery_row, QrCodeCrateRenderer, WalkdirGalleryLister,
};
use wedding_gallery_application::ApplicationService;
use wedding_gallery_domain::ImageCategory;

#[derive(Debug, Parser)]
#[command(name = "wedding-gallery", about = "Wedding photo gallery page server")]
struct Cli {
    /// TOML file with site configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Serve the gallery page over HTTP.
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the merged gallery sequence.
    List {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        category: Option<ImageCategory>,
    },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    ApplicationService::new(
        Arc::new(WalkdirGalleryLister::new(&config.public_root)),
        Box::new(QrCodeCrateRenderer::default()),
    )
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = AppConfig::load(cli.config.as_deref())
        .map_err(|error| CommandError::Usage(error.to_string()))?;
    let service = build_application_service(&config);

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.bind_address.clone());
            http::serve(http::AppState::new(service, config), &bind)
                .await
                .map_err(|error| CommandError::Runtime(format!("server failed: {error}")))
        }
        Command::List { json, category } => {
            let mut gallery = service
                .assemble_gallery(config.assemble_command())
                .await
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            if let Some(category) = category {
                gallery = gallery.only(category);
            }

            if json {
                let rendered = present_gallery_json(&gallery)
                    .map_err(|error| CommandError::Runtime(error.to_string()))?;
                println!("{rendered}");
                return Ok(());
            }
            if gallery.is_empty() {
                println!(
                    "no images found; add files to {}/{} or {}/{}",
                    config.public_root,
                    config.desktop_folder,
                    config.public_root,
                    config.mobile_folder
                );
                return Ok(());
            }
            for image in &gallery {
                println!("{}", present_gallery_row(image));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["wedding-gallery"]).expect("should parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parse_list_with_category() {
        let cli = Cli::try_parse_from([
            "wedding-gallery",
            "list",
            "--json",
            "--category",
            "mobile",
        ])
        .expect("list should parse");
        assert_eq!(
            cli.command,
            Some(Command::List {
                json: true,
                category: Some(ImageCategory::Mobile),
            })
        );
    }

    #[test]
    fn parse_list_rejects_unknown_category() {
        let result = Cli::try_parse_from(["wedding-gallery", "list", "--category", "tablet"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from([
            "wedding-gallery",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--config",
            "site.toml",
        ])
        .expect("serve should parse");
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                bind: Some("0.0.0.0:8080".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn list_succeeds_on_missing_folders() {
        let root = tempfile::TempDir::new().expect("tempdir");
        let config_path = root.path().join("site.toml");
        std::fs::write(
            &config_path,
            format!("public_root = {:?}\n", root.path().join("public").display().to_string()),
        )
        .expect("write config");

        let cli = Cli::try_parse_from([
            "wedding-gallery".to_string(),
            "--config".to_string(),
            config_path.display().to_string(),
            "list".to_string(),
        ])
        .expect("list should parse");

        assert!(run(cli).await.is_ok());
    }
}
