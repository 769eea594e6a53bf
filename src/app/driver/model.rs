use hoyo_api::models::api_cdkey::RedemptionResult;
use serde::{ser::SerializeMap, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionResults {
    pub region: String,
    pub accounts: Vec<(u64, RedemptionResult)>,
}

/// 区服 -> 角色UID -> 兑换结果，保持插入顺序
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultTable {
    regions: Vec<RegionResults>,
}

impl ResultTable {
    pub fn insert(&mut self, region: &str, account_id: u64, result: RedemptionResult) {
        let i = match self.regions.iter().position(|x| x.region == region) {
            Some(i) => i,
            None => {
                self.regions.push(RegionResults {
                    region: region.to_string(),
                    accounts: Vec::new(),
                });
                self.regions.len() - 1
            }
        };
        let entry = &mut self.regions[i];
        match entry.accounts.iter_mut().find(|(id, _)| *id == account_id) {
            Some((_, existing)) => *existing = result,
            None => entry.accounts.push((account_id, result)),
        }
    }

    pub fn get(&self, region: &str, account_id: u64) -> Option<RedemptionResult> {
        self.region(region)?
            .accounts
            .iter()
            .find(|(id, _)| *id == account_id)
            .map(|(_, result)| *result)
    }

    pub fn contains(&self, region: &str, account_id: u64) -> bool {
        self.get(region, account_id).is_some()
    }

    pub fn region(&self, region: &str) -> Option<&RegionResults> {
        self.regions.iter().find(|x| x.region == region)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64, RedemptionResult)> {
        self.regions.iter().flat_map(|x| {
            x.accounts
                .iter()
                .map(move |(id, result)| (x.region.as_str(), *id, *result))
        })
    }

    pub fn first(&self) -> Option<(&str, u64, RedemptionResult)> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        self.regions.iter().map(|x| x.accounts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct AccountResults<'a>(&'a [(u64, RedemptionResult)]);

impl Serialize for AccountResults<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, result) in self.0 {
            map.serialize_entry(&id.to_string(), result)?;
        }
        map.end()
    }
}

impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.regions.len()))?;
        for x in &self.regions {
            map.serialize_entry(&x.region, &AccountResults(&x.accounts))?;
        }
        map.end()
    }
}
