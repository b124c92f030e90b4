//! Text rendering of statistics, test results and errors.
//!
//! The dialog texts use two decimals; exports use full precision (see
//! [`export`]). NaN is always rendered as `nan`.

pub mod export;

pub use export::{
    read_summary_csv, save_summary_csv, save_summary_text, write_summary_csv, write_summary_text,
};

use crate::analysis::{Analysis, Evaluation};
use crate::error::{HypotestError, Result};
use crate::stats::DescriptiveStats;
use serde::Serialize;
use std::path::Path;

/// Title of the statistics dialog.
pub const STATISTICS_TITLE: &str = "Статистика";
/// Title of the test result dialog.
pub const TEST_TITLE: &str = "Проверка гипотезы";

pub const MEAN_LABEL: &str = "Среднее значение";
pub const STD_DEV_LABEL: &str = "Стандартное отклонение";
pub const MEDIAN_LABEL: &str = "Медиана";

/// Group headers as shown in dialogs and text exports.
pub const GROUP_NAMES: [&str; 2] = ["1 группа", "2 группа"];

pub const SAVED_CSV_MESSAGE: &str = "Результаты успешно сохранены в табличном формате.";
pub const SAVED_TEXT_MESSAGE: &str = "Результаты успешно сохранены в текстовом формате.";

/// Formats a value with two decimals.
///
/// ```
/// use hypotest::report::format_fixed;
///
/// assert_eq!(format_fixed(1.581_138), "1.58");
/// assert_eq!(format_fixed(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Formats a value at full precision, keeping one decimal on whole numbers.
///
/// ```
/// use hypotest::report::format_full;
///
/// assert_eq!(format_full(3.0), "3.0");
/// assert_eq!(format_full(0.488_422_316_622_593_7), "0.4884223166225937");
/// assert_eq!(format_full(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_full(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Body of the statistics dialog.
///
/// ```
/// use hypotest::report::statistics_text;
/// use hypotest::stats::DescriptiveStats;
///
/// let s = DescriptiveStats::from_slice(&[1.0, 2.0, 3.0]).expect("valid");
/// let text = statistics_text(&[s, s]);
/// assert!(text.starts_with("1 группа\nСреднее значение: 2.00\n"));
/// ```
#[must_use]
pub fn statistics_text(stats: &[DescriptiveStats; 2]) -> String {
    stats
        .iter()
        .zip(GROUP_NAMES)
        .map(|(s, name)| {
            format!(
                "{name}\n{MEAN_LABEL}: {}\n{STD_DEV_LABEL}: {}\n{MEDIAN_LABEL}: {}",
                format_fixed(s.mean),
                format_fixed(s.std_dev),
                format_fixed(s.median)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Body of the test result dialog.
#[must_use]
pub fn test_text(evaluation: &Evaluation) -> String {
    format!(
        "Статистика Ансари-Бредли: {}\nP-значение: {}\nРезультат: {}",
        format_full(evaluation.test.statistic),
        format_full(evaluation.test.pvalue),
        evaluation.decision.label()
    )
}

/// Message shown to the user for an error.
#[must_use]
pub fn user_message(err: &HypotestError) -> String {
    match err {
        HypotestError::FileNotSelected => "Файл не выбран.".to_string(),
        HypotestError::EmptyFile => "Выбранный файл пуст.".to_string(),
        HypotestError::UnparsableFile { line: 0, message } => {
            format!("Не удалось проанализировать выбранный файл.\n{message}")
        }
        HypotestError::UnparsableFile { line, message } => {
            format!("Не удалось проанализировать выбранный файл.\nСтрока {line}: {message}")
        }
        HypotestError::InvalidInput(msg) => format!("Некорректные входные данные: {msg}"),
        HypotestError::NoSignificanceLevelSet => "Не задан уровень значимости".to_string(),
        HypotestError::InvalidAlpha(_) => "Некорректное значение альфа".to_string(),
        HypotestError::NoData => "Данные недоступны.".to_string(),
        HypotestError::OperationFailed(msg) => msg.clone(),
        HypotestError::Io(e) => format!("Ошибка ввода-вывода: {e}"),
        HypotestError::Config(msg) => format!("Ошибка конфигурации: {msg}"),
    }
}

#[derive(Serialize)]
struct GroupReport<'a> {
    name: &'a str,
    label: Option<&'a str>,
    n: usize,
    #[serde(flatten)]
    stats: &'a DescriptiveStats,
}

#[derive(Serialize)]
struct Report<'a> {
    source: Option<&'a Path>,
    groups: [GroupReport<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<&'a Evaluation>,
}

/// JSON document describing an analysis and, optionally, its evaluation.
///
/// NaN statistics serialize as `null`.
///
/// # Errors
///
/// Returns [`HypotestError::OperationFailed`] if serialization fails.
pub fn json_report(analysis: &Analysis, evaluation: Option<&Evaluation>) -> Result<String> {
    let stats = analysis.describe();
    let labels = analysis.labels();
    let group = |i: usize, n: usize| GroupReport {
        name: GROUP_NAMES[i],
        label: labels.map(|l| l[i].as_str()),
        n,
        stats: &stats[i],
    };
    let report = Report {
        source: analysis.source(),
        groups: [
            group(0, analysis.group1().len()),
            group(1, analysis.group2().len()),
        ],
        test: evaluation,
    };
    serde_json::to_string_pretty(&report).map_err(HypotestError::operation_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Analysis {
        Analysis::from_vecs(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 6.0, 8.0, 100.0],
        )
        .unwrap()
    }

    #[test]
    fn test_statistics_text_layout() {
        let text = statistics_text(example().describe());
        let expected = "1 группа\n\
                        Среднее значение: 3.00\n\
                        Стандартное отклонение: 1.58\n\
                        Медиана: 3.00\n\
                        \n\
                        2 группа\n\
                        Среднее значение: 24.00\n\
                        Стандартное отклонение: 42.54\n\
                        Медиана: 6.00";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_statistics_text_single_observation() {
        let analysis = Analysis::from_vecs(vec![5.0], vec![1.0, 2.0]).unwrap();
        let text = statistics_text(analysis.describe());
        assert!(text.contains("Стандартное отклонение: nan"));
    }

    #[test]
    fn test_test_text() {
        let evaluation = example().evaluate(Some("0.05")).unwrap();
        let text = test_text(&evaluation);
        assert!(text.starts_with("Статистика Ансари-Бредли: 17.0\nP-значение: 0.48842"));
        assert!(text.ends_with("Результат: Гипотеза принята"));
    }

    #[test]
    fn test_format_full_large_and_small() {
        assert_eq!(format_full(185.5), "185.5");
        assert_eq!(format_full(1e20), "100000000000000000000");
        assert_eq!(format_full(-2.0), "-2.0");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(user_message(&HypotestError::EmptyFile), "Выбранный файл пуст.");
        assert_eq!(user_message(&HypotestError::FileNotSelected), "Файл не выбран.");
        assert_eq!(user_message(&HypotestError::NoData), "Данные недоступны.");
        let msg = user_message(&HypotestError::UnparsableFile {
            line: 4,
            message: "bad".to_string(),
        });
        assert!(msg.starts_with("Не удалось проанализировать выбранный файл."));
        assert!(msg.contains("Строка 4: bad"));
    }

    #[test]
    fn test_json_report_shape() {
        let analysis = example();
        let evaluation = analysis.evaluate(Some("0.05")).unwrap();
        let json = json_report(&analysis, Some(&evaluation)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["mean"], 3.0);
        assert_eq!(value["groups"][1]["n"], 5);
        assert_eq!(value["test"]["decision"], "hypothesis_accepted");
        assert_eq!(value["test"]["test"]["method"], "normal_approx");
    }

    #[test]
    fn test_json_report_without_test() {
        let json = json_report(&example(), None).unwrap();
        assert!(!json.contains("\"test\""));
    }

    #[test]
    fn test_json_report_nan_is_null() {
        let analysis = Analysis::from_vecs(vec![5.0], vec![1.0, 2.0]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&json_report(&analysis, None).unwrap()).unwrap();
        assert!(value["groups"][0]["std_dev"].is_null());
    }
}
