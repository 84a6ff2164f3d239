//! Pure conversion functions: TOML config and CLI flags -> runtime types.

use anyhow::{Result, bail};

use semana_weekday::{DayPolicy, WeekdayCalculator};

use crate::cli::OutputArgs;
use crate::config::{CalculatorToml, SemanaConfig};
use crate::messages::{Lang, Messages};

/// Parses a language code into the corresponding enum variant.
pub fn parse_lang(s: &str) -> Result<Lang> {
    match s.to_lowercase().as_str() {
        "pt-br" | "pt_br" | "pt" => Ok(Lang::PtBr),
        "en" => Ok(Lang::En),
        other => bail!("unknown language: {other:?} (expected \"pt-br\" or \"en\")"),
    }
}

/// Builds the calculator; `strict` from the command line forces
/// [`DayPolicy::Strict`].
pub fn build_calculator(cfg: &CalculatorToml, strict: bool) -> WeekdayCalculator {
    let policy = if strict || cfg.strict_days {
        DayPolicy::Strict
    } else {
        DayPolicy::Permissive
    };
    WeekdayCalculator::new().with_day_policy(policy)
}

/// Builds the message table, preferring `--lang` over `[output].lang`.
pub fn build_messages(config: &SemanaConfig, args: &OutputArgs) -> Result<Messages> {
    let code = args.lang.as_deref().unwrap_or(&config.output.lang);
    Ok(Messages::new(parse_lang(code)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lang_variants() {
        assert_eq!(parse_lang("pt-BR").unwrap(), Lang::PtBr);
        assert_eq!(parse_lang("pt").unwrap(), Lang::PtBr);
        assert_eq!(parse_lang("EN").unwrap(), Lang::En);
        assert!(parse_lang("fr").is_err());
    }

    #[test]
    fn strict_flag_or_config() {
        let permissive = CalculatorToml { strict_days: false };
        let strict = CalculatorToml { strict_days: true };
        assert_eq!(
            build_calculator(&permissive, false).day_policy(),
            DayPolicy::Permissive
        );
        assert_eq!(
            build_calculator(&permissive, true).day_policy(),
            DayPolicy::Strict
        );
        assert_eq!(
            build_calculator(&strict, false).day_policy(),
            DayPolicy::Strict
        );
    }

    #[test]
    fn cli_lang_overrides_config() {
        let config = SemanaConfig::default();
        let args = OutputArgs {
            strict: false,
            lang: Some("en".to_string()),
        };
        assert_eq!(build_messages(&config, &args).unwrap().lang(), Lang::En);

        let args = OutputArgs {
            strict: false,
            lang: None,
        };
        assert_eq!(build_messages(&config, &args).unwrap().lang(), Lang::PtBr);
    }

    #[test]
    fn unknown_lang_is_an_error() {
        let config = SemanaConfig::default();
        let args = OutputArgs {
            strict: false,
            lang: Some("xx".to_string()),
        };
        assert!(build_messages(&config, &args).is_err());
    }
}
