//! User-facing text, one table per language keyed by [`MessageId`].
//!
//! Templates use `{name}` placeholders filled by [`Messages::render`].

use std::fmt::Display;

use semana_weekday::{ValidationError, Weekday};

/// Supported message languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    /// Brazilian Portuguese.
    #[default]
    PtBr,
    /// English.
    En,
}

/// Identifier of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    Greeting,
    AskYear,
    AskMonth,
    AskDay,
    /// Placeholders: `day`, `month`, `year`, `weekday`.
    Result,
    /// Placeholder: `year`.
    YearOutOfRange,
    /// Placeholder: `month`.
    MonthOutOfRange,
    /// Placeholder: `day`.
    DayOutOfRange,
    /// Placeholders: `day`, `month`, `max_day`.
    DayExceedsMonth,
    /// Placeholder: `input`.
    NotANumber,
    EndOfInput,
}

fn pt_br(id: MessageId) -> &'static str {
    match id {
        MessageId::Greeting => "Olá, seja bem-vindo ao analisador de dias da semana!",
        MessageId::AskYear => "Digite o ano [de 1800 a 2199]: ",
        MessageId::AskMonth => "Digite o número do mês [1 a 12]: ",
        MessageId::AskDay => "Digite o dia [1 a 31 dependendo do mês em questão]: ",
        MessageId::Result => "O dia da semana de {day} do mês {month} de {year} é {weekday}!",
        MessageId::YearOutOfRange => "O ano precisa estar entre 1800 e 2199, você digitou {year}.",
        MessageId::MonthOutOfRange => "O mês precisa estar entre 1 e 12, você digitou {month}.",
        MessageId::DayOutOfRange => {
            "O dia precisa estar entre 1 e 31, dependendo do mês. Você digitou {day}."
        }
        MessageId::DayExceedsMonth => {
            "O mês {month} tem apenas {max_day} dias neste ano, você digitou {day}."
        }
        MessageId::NotANumber => "Era esperado um número inteiro, você digitou \"{input}\".",
        MessageId::EndOfInput => "A entrada terminou antes de todos os valores serem informados.",
    }
}

fn en(id: MessageId) -> &'static str {
    match id {
        MessageId::Greeting => "Hello, welcome to the day-of-week finder!",
        MessageId::AskYear => "Enter the year [1800 to 2199]: ",
        MessageId::AskMonth => "Enter the month number [1 to 12]: ",
        MessageId::AskDay => "Enter the day [1 to 31 depending on the month]: ",
        MessageId::Result => "The day of the week of {year}-{month}-{day} is {weekday}!",
        MessageId::YearOutOfRange => "The year must be between 1800 and 2199, you entered {year}.",
        MessageId::MonthOutOfRange => "The month must be between 1 and 12, you entered {month}.",
        MessageId::DayOutOfRange => "The day must be between 1 and 31, you entered {day}.",
        MessageId::DayExceedsMonth => {
            "Month {month} has only {max_day} days that year, you entered {day}."
        }
        MessageId::NotANumber => "Expected a whole number, you entered \"{input}\".",
        MessageId::EndOfInput => "Input ended before all values were given.",
    }
}

/// Message table for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    lang: Lang,
}

impl Messages {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Raw template for `id`.
    pub fn template(&self, id: MessageId) -> &'static str {
        match self.lang {
            Lang::PtBr => pt_br(id),
            Lang::En => en(id),
        }
    }

    /// Fills the `{name}` placeholders of the template for `id`.
    pub fn render(&self, id: MessageId, args: &[(&str, &dyn Display)]) -> String {
        args.iter()
            .fold(self.template(id).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self.lang {
            Lang::En => weekday.name(),
            Lang::PtBr => match weekday {
                Weekday::Saturday => "Sábado",
                Weekday::Sunday => "Domingo",
                Weekday::Monday => "Segunda-feira",
                Weekday::Tuesday => "Terça-feira",
                Weekday::Wednesday => "Quarta-feira",
                Weekday::Thursday => "Quinta-feira",
                Weekday::Friday => "Sexta-feira",
            },
        }
    }

    /// Sentence announcing the weekday of a date.
    pub fn result(&self, year: i32, month: i32, day: i32, weekday: Weekday) -> String {
        self.render(
            MessageId::Result,
            &[
                ("year", &year),
                ("month", &month),
                ("day", &day),
                ("weekday", &self.weekday_name(weekday)),
            ],
        )
    }

    /// Explanation of a rejected input.
    pub fn validation_error(&self, err: &ValidationError) -> String {
        match *err {
            ValidationError::YearOutOfRange(year) => {
                self.render(MessageId::YearOutOfRange, &[("year", &year)])
            }
            ValidationError::MonthOutOfRange(month) => {
                self.render(MessageId::MonthOutOfRange, &[("month", &month)])
            }
            ValidationError::DayOutOfRange(day) => {
                self.render(MessageId::DayOutOfRange, &[("day", &day)])
            }
            ValidationError::DayExceedsMonth {
                day,
                month,
                max_day,
            } => self.render(
                MessageId::DayExceedsMonth,
                &[("day", &day), ("month", &month), ("max_day", &max_day)],
            ),
        }
    }
}
