use super::{config::RedeemPolicy, driver::model::ResultTable};

pub fn render(table: &ResultTable, policy: RedeemPolicy, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(table)?);
    }
    if table.is_empty() {
        return Ok("no game roles found".into());
    }
    Ok(match (policy, table.first()) {
        (RedeemPolicy::FirstResult, Some((_, _, result))) => result.to_string(),
        _ => table
            .iter()
            .map(|(region, id, result)| format!("{region}\t{id}\t{result}"))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoyo_api::models::api_cdkey::RedemptionResult;

    #[test]
    fn render_text() {
        let mut table = ResultTable::default();
        assert_eq!(
            render(&table, RedeemPolicy::Exhaustive, false).unwrap(),
            "no game roles found"
        );

        table.insert("os_usa", 800000001, RedemptionResult::Success);
        table.insert("os_euro", 700000001, RedemptionResult::AlreadyUsed);
        assert_eq!(
            render(&table, RedeemPolicy::Exhaustive, false).unwrap(),
            "os_usa\t800000001\tsuccess\nos_euro\t700000001\talready in use"
        );
        assert_eq!(
            render(&table, RedeemPolicy::FirstResult, false).unwrap(),
            "success"
        );
    }

    #[test]
    fn render_json() {
        let mut table = ResultTable::default();
        table.insert("os_cht", 900000001, RedemptionResult::Invalid);
        let json: serde_json::Value =
            serde_json::from_str(&render(&table, RedeemPolicy::Exhaustive, true).unwrap())
                .unwrap();
        assert_eq!(json["os_cht"]["900000001"], "invalid");
    }
}
