// SPDX-License-Identifier: MPL-2.0
use site_locale::config::{self, Config, SITE_NAME};
use site_locale::i18n::{self, paths, Activation, CoverageReport, LocaleRouter, LocaleSwitch};
use site_locale::infrastructure::EmbeddedSource;
use site_locale::seo::{PageLinkOptions, PageLinks};
use site_locale::{Locale, Namespace};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage: site_locale [--config PATH] [--lang CODE] <command> [args]

Commands:
  route <path>...                 Navigate through the locale gate
  lookup <key> [--namespace ID]...
                                  Translate a key in the preferred locale
  links <path>                    Print head links and language switcher paths
  coverage                        Report translation coverage against English
";

struct Flags {
    config: Option<PathBuf>,
    lang: Option<String>,
    namespaces: Vec<String>,
    command: Option<String>,
    args: Vec<String>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        lang: args.opt_value_from_str("--lang")?,
        namespaces: args.values_from_str("--namespace")?,
        command: args.subcommand()?,
        args: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(flags)
}

fn load_config(path: Option<&PathBuf>) -> Config {
    match path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "using default configuration");
            Config::default()
        }),
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                tracing::warn!(%warning, "using default configuration");
            }
            config
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let config = load_config(flags.config.as_ref());

    let result = match flags.command.as_deref() {
        Some("route") => route(&config, &flags.args).await,
        Some("lookup") => lookup(&config, &flags).await,
        Some("links") => links(&config, &flags.args),
        Some("coverage") => coverage(),
        _ => {
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn route(config: &Config, paths: &[String]) -> site_locale::Result<()> {
    let store = i18n::init(config)?;
    let router = LocaleRouter::new(store.clone());
    let mut switches = router.events().subscribe();

    for path in paths {
        match router.activate(path).await {
            Activation::Redirect { to } => println!("{path} -> redirect {to}"),
            Activation::Ready { locale } => {
                if let Err(err) = store.preload_for_route(path).await {
                    tracing::warn!(%err, "page namespaces unavailable");
                }
                println!("{path} -> ready ({})", locale.native_name());
            }
            Activation::Superseded { requested, .. } => {
                println!("{path} -> superseded ({requested})");
            }
            Activation::Fallback { active, error, .. } => {
                println!("{path} -> fallback to {active}: {error}");
            }
        }
        while let Ok(event) = switches.try_recv() {
            println!("  event {} {}", LocaleSwitch::EVENT_NAME, event.label());
        }
    }
    Ok(())
}

async fn lookup(config: &Config, flags: &Flags) -> site_locale::Result<()> {
    let Some(key) = flags.args.first() else {
        eprint!("{USAGE}");
        return Ok(());
    };
    let store = i18n::init(config)?;
    let locale = i18n::resolve_preferred_locale(flags.lang.as_deref(), config);
    store.load_locale(locale).await?;
    store.set_active_locale(locale)?;

    let mut namespaces = config.preload_namespaces();
    namespaces.extend(flags.namespaces.iter().filter_map(|id| Namespace::from_id(id)));
    store.load_namespaces(&namespaces).await?;

    println!("[{locale}] {key} = {}", store.t(key));
    Ok(())
}

fn links(config: &Config, args: &[String]) -> site_locale::Result<()> {
    let path = args.first().map_or("/", String::as_str);
    let (locale, rest) = paths::split_locale(path).unwrap_or((Locale::DEFAULT, ""));
    let links = PageLinks::build(PageLinkOptions {
        base_url: &config.seo.base_url,
        locale,
        path: rest,
        locales: None,
        canonical_locale: None,
    });

    println!("<html lang=\"{}\">", links.lang);
    println!("canonical {}", links.canonical);
    for alternate in &links.alternates {
        println!("alternate {} {}", alternate.hreflang, alternate.href);
    }
    println!("og:site_name {}", SITE_NAME);
    println!("og:locale {}", links.og_locale);
    for og_locale in &links.og_locale_alternates {
        println!("og:locale:alternate {og_locale}");
    }
    for to in Locale::ALL.into_iter().filter(|l| *l != locale) {
        println!("switch {} {}", to.native_name(), paths::switch_locale_path(path, to));
    }
    Ok(())
}

fn coverage() -> site_locale::Result<()> {
    let source = EmbeddedSource::new();
    let load = |locale: Locale| {
        source
            .read_locale(locale)
            .map_err(|source| site_locale::Error::LocaleLoad { locale, source })
    };

    // Translated bundles carry the namespace keys, so compare against the
    // fully merged English content.
    let mut reference = load(Locale::DEFAULT)?;
    for namespace in Namespace::ALL {
        let slice = source
            .read_namespace(namespace)
            .map_err(|source| site_locale::Error::NamespaceLoad {
                failed: vec![namespace],
                source,
            })?;
        reference.merge(slice);
    }

    for locale in Locale::ALL.into_iter().filter(|l| !l.is_default()) {
        let report = CoverageReport::compare(locale, &reference, &load(locale)?);
        println!(
            "{locale}: {} missing, {} extra, {} empty",
            report.missing.len(),
            report.extra.len(),
            report.empty.len()
        );
        for key in report.missing.iter().chain(&report.empty) {
            println!("  {key}");
        }
    }
    Ok(())
}
