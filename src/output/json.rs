use super::MeasureRow;
use crate::errors::Result;

pub fn render_json(rows: &[MeasureRow<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasureValue;
    use crate::rating::Rating;

    #[test]
    fn ratings_are_rendered_with_their_letter() {
        let value = MeasureValue::Int(4);
        let rows = [MeasureRow {
            component_ref: 1,
            component_key: "proj",
            component_type: "PROJECT".to_string(),
            metric: "reliability_rating",
            value: &value,
            rating: Some(Rating::D),
            data: None,
        }];
        let json: serde_json::Value = serde_json::from_str(&render_json(&rows).unwrap()).unwrap();
        assert_eq!(json[0]["value"], 4);
        assert_eq!(json[0]["rating"], "D");
        assert!(json[0].get("data").is_none());
    }
}
