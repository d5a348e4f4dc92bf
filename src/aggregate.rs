use std::collections::HashMap;

use crate::model::{AggregatedReagent, StoredEnchant};

/// Total the reagents for a multiset of enchant ids.
///
/// Each id may appear several times; an enchant's reagents are multiplied by
/// how often its id was requested. Totals are grouped by reagent name in the
/// order names are first seen, walking `enchants` in the given order, and
/// keep the icon of that first occurrence. Ids with no matching enchant are
/// ignored.
pub fn aggregate(enchants: &[StoredEnchant], ids: &[u64]) -> Vec<AggregatedReagent> {
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for id in ids {
        *counts.entry(*id).or_default() += 1;
    }

    let mut totals: Vec<AggregatedReagent> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for enchant in enchants {
        let Some(&count) = counts.get(&enchant.id) else {
            continue;
        };
        for reagent in &enchant.recipe.reagents {
            let amount = u64::from(reagent.quantity) * count;
            match index.get(&reagent.name) {
                Some(&i) => totals[i].total_quantity += amount,
                None => {
                    index.insert(reagent.name.clone(), totals.len());
                    totals.push(AggregatedReagent {
                        name: reagent.name.clone(),
                        total_quantity: amount,
                        icon_url: reagent.icon_url.clone(),
                    });
                }
            }
        }
    }

    totals
}
