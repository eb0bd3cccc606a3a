use crate::model::{Contribution, PeriodActivity};
use std::collections::BTreeSet;
use std::mem;

/// Group an ordered record sequence into per-period sets of distinct users.
///
/// Only *adjacent* runs of equal-period records are merged: a period that
/// reappears after an intervening one produces a second, separate entry
/// with its own user set. Callers rely on this exact behavior; input must
/// be chronologically ordered for a true per-month grouping to come out.
pub fn aggregate(records: &[Contribution]) -> Vec<PeriodActivity> {
    let mut groups = Vec::new();
    let Some(first) = records.first() else {
        return groups;
    };

    let mut current = first.period;
    let mut users: BTreeSet<String> = BTreeSet::new();
    for record in records {
        if record.period != current {
            groups.push(PeriodActivity {
                period: current,
                active_users: mem::take(&mut users),
            });
            current = record.period;
        }
        users.insert(record.user.clone());
    }
    groups.push(PeriodActivity {
        period: current,
        active_users: users,
    });
    groups
}
