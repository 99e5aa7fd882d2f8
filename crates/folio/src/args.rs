use std::collections::BTreeSet;

use tracing::{error, info};
use unic_langid::LanguageIdentifier;

use crate::{FolioOptions, Route, Theme};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub locale: Option<LanguageIdentifier>,
    /// `--light` / `--dark`, overriding both the saved and the system theme
    pub theme: Option<Theme>,
    pub options: FolioOptions,
    pub datapath: Option<String>,
    /// directory with content JSON files replacing the built-in ones
    pub content: Option<String>,
    pub route: Option<Route>,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--light" {
                res.theme = Some(Theme::Light);
            } else if arg == "--dark" {
                res.theme = Some(Theme::Dark);
            } else if arg == "--debug" {
                res.options.set(FolioOptions::Debug, true);
            } else if arg == "--no-persist" {
                res.options.set(FolioOptions::NoPersist, true);
            } else if arg == "--locale" {
                i += 1;
                let Some(locale) = args.get(i) else {
                    error!("locale argument missing?");
                    continue;
                };
                match locale.parse::<LanguageIdentifier>() {
                    Ok(locale) => {
                        info!("parsed locale '{locale}' from args");
                        res.locale = Some(locale);
                    }
                    Err(err) => error!("locale failed to parse: {err}"),
                }
            } else if arg == "--datapath" {
                i += 1;
                let path = if let Some(next_arg) = args.get(i) {
                    next_arg
                } else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else if arg == "--content" {
                i += 1;
                let path = if let Some(next_arg) = args.get(i) {
                    next_arg
                } else {
                    error!("content argument missing?");
                    continue;
                };
                res.content = Some(path.clone());
            } else if arg == "--route" {
                i += 1;
                let route = if let Some(next_arg) = args.get(i) {
                    next_arg
                } else {
                    error!("route argument missing?");
                    continue;
                };
                res.route = Some(Route::from_fragment(route));
            } else if let Some(fragment) = arg.strip_prefix('#') {
                res.route = Some(Route::from_fragment(fragment));
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (Args, BTreeSet<String>) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Args::parse(&args)
    }

    #[test]
    fn flags_and_values() {
        let (args, unknown) = parse(&[
            "--dark",
            "--locale",
            "ja-JP",
            "--datapath",
            "/tmp/folio",
            "--route",
            "personal",
            "--debug",
        ]);
        assert!(unknown.is_empty());
        assert_eq!(args.theme, Some(Theme::Dark));
        assert_eq!(
            args.locale.map(|l| l.to_string()),
            Some("ja-JP".to_string())
        );
        assert_eq!(args.datapath.as_deref(), Some("/tmp/folio"));
        assert_eq!(args.route, Some(Route::Personal));
        assert!(args.options.contains(FolioOptions::Debug));
        assert!(!args.options.contains(FolioOptions::NoPersist));
    }

    #[test]
    fn fragment_argument_selects_route() {
        let (args, _) = parse(&["#personal"]);
        assert_eq!(args.route, Some(Route::Personal));
        let (args, _) = parse(&["#about"]);
        assert_eq!(args.route, Some(Route::Portfolio));
    }

    #[test]
    fn unknown_and_missing_values() {
        let (args, unknown) = parse(&["--frobnicate", "--content"]);
        assert_eq!(args.content, None);
        assert!(unknown.contains("--frobnicate"));
        assert_eq!(unknown.len(), 1);
    }

    #[test]
    fn testrunner_is_not_a_flag() {
        let (args, unknown) = parse(&["--testrunner"]);
        assert_eq!(args.options, FolioOptions::empty());
        assert!(unknown.contains("--testrunner"));
    }

    #[test]
    fn last_theme_flag_wins() {
        let (args, _) = parse(&["--dark", "--light"]);
        assert_eq!(args.theme, Some(Theme::Light));
    }
}
