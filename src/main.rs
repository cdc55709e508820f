use clap::Parser;
use onetap_doctor::domain::ports::ConfigProvider;
use onetap_doctor::utils::{logger, validation::Validate};
use onetap_doctor::{
    sample_roster, AppSettings, CliConfig, DoctorDirectory, FileStore, HostedTextGenerator,
    PhotoResolver, SelectionSet, StaticPhotoSource, SymptomChecker,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting onetap-doctor CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let provider: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => match AppSettings::load(path) {
            Ok(settings) => Box::new(settings),
            Err(e) => {
                tracing::error!("Settings file rejected: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(cli.clone())
        }
    };

    let store = FileStore::new(provider.cache_dir().to_string());
    let source =
        StaticPhotoSource::with_delay(Duration::from_millis(provider.photo_lookup_delay_ms()));
    let resolver = PhotoResolver::new(store, source);

    if cli.clear_cache {
        resolver.clear().await?;
        tracing::info!("Photo cache cleared");
    }

    let mut directory = DoctorDirectory::new(sample_roster());
    directory.resolve_photos(&resolver).await;

    println!("Doctors ({})", cli.city);
    for doctor in directory.filtered(cli.city) {
        let modes: Vec<String> = doctor
            .consultation_modes
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "  [{}] {} — {} ({}), {} yrs, ⭐ {}, {} [{}]",
            doctor.id,
            doctor.name,
            doctor.specialization,
            doctor.city,
            doctor.experience_years,
            doctor.rating,
            doctor.availability,
            modes.join(", ")
        );
        if let Some(url) = &doctor.photo_url {
            tracing::debug!("Photo for {}: {}", doctor.name, url);
        }
    }

    if !cli.compare.is_empty() {
        if cli.compare.len() != 2 {
            eprintln!("❌ --compare takes exactly two doctor ids, e.g. --compare 2,4");
            std::process::exit(1);
        }

        let mut selection = SelectionSet::new();
        for id in &cli.compare {
            let Some(doctor) = directory.find(id) else {
                eprintln!("❌ Unknown doctor id: {}", id);
                std::process::exit(1);
            };
            if let Err(e) = selection.toggle(doctor) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }

        let Some(comparison) = selection.compare() else {
            eprintln!("❌ --compare needs two distinct doctor ids");
            std::process::exit(1);
        };

        println!("\nComparison");
        for doctor in selection.doctors() {
            println!(
                "  {} — ⭐ {}, {} yrs, languages: {}",
                doctor.name,
                doctor.rating,
                doctor.experience_years,
                doctor.languages.join(", ")
            );
        }

        let generator = HostedTextGenerator::new(provider.ai_endpoint().to_string())?;
        let checker = SymptomChecker::new(
            generator,
            provider.ai_model().to_string(),
            provider.ai_max_tokens(),
        );
        let rationale = checker.justify_comparison(&comparison).await;
        println!("\n💡 {}", rationale);
    }

    if let Some(symptoms) = &cli.symptoms {
        let generator = HostedTextGenerator::new(provider.ai_endpoint().to_string())?;
        let mut checker = SymptomChecker::new(
            generator,
            provider.ai_model().to_string(),
            provider.ai_max_tokens(),
        );

        println!("\n🩺 Analyzing symptoms...");
        let reply = checker.analyze(symptoms).await;
        println!("{}", reply);
    }

    tracing::info!("✅ Done");
    Ok(())
}
