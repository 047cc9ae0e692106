use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the DR25 threshold-crossing-event table.
///
/// The archive schema is sparse, so every column is optional and unknown
/// columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TceRow {
    pub tce_plnt_num: Option<f64>,
    pub tce_period: Option<f64>,
    pub tce_prad: Option<f64>,
    pub tce_eqt: Option<f64>,
    pub tce_insol: Option<f64>,
    pub tce_duration: Option<f64>,
    pub tce_depth: Option<f64>,
    pub tce_model_snr: Option<f64>,
    pub tce_impact: Option<f64>,
    pub tce_steff: Option<f64>,
    pub tce_sradius: Option<f64>,
    pub tce_smass: Option<f64>,
    pub tce_sage: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    /// Reference epoch. Usually numeric, but textual values are passed through.
    pub tce_time0bk: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ignores_unknown_columns() {
        let row: TceRow = serde_json::from_str(
            r#"{"kepid": 757450, "tce_plnt_num": 1, "tce_period": 8.88, "tce_datalink_dvs": "x"}"#,
        )
        .unwrap();
        assert_eq!(row.tce_plnt_num, Some(1.0));
        assert_eq!(row.tce_period, Some(8.88));
        assert_eq!(row.tce_prad, None);
    }

    #[test]
    fn test_row_null_columns_are_absent() {
        let row: TceRow =
            serde_json::from_str(r#"{"tce_smass": null, "tce_time0bk": null}"#).unwrap();
        assert_eq!(row.tce_smass, None);
        assert_eq!(row.tce_time0bk, None);
    }

    #[test]
    fn test_row_keeps_textual_epoch() {
        let row: TceRow =
            serde_json::from_str(r#"{"tce_time0bk": "2009-05-13 00:00:00"}"#).unwrap();
        assert_eq!(
            row.tce_time0bk,
            Some(Value::String("2009-05-13 00:00:00".to_string()))
        );
    }
}
