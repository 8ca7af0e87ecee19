use std::cmp::Ordering;

use crate::format::parse_percent;
use crate::types::{ContainerRecord, SortDirection, SortKey, SortOrder};

/// Higher usage first; unmeasured values sink below measured ones and are
/// equal among themselves.
fn compare_usage(a: &str, b: &str) -> Ordering {
    match (parse_percent(a), parse_percent(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn primary(a: &ContainerRecord, b: &ContainerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Image => a.image.cmp(&b.image),
        SortKey::Id => Ordering::Equal,
        SortKey::Command => a.command.cmp(&b.command),
        SortKey::Uptime => a.uptime.cmp(&b.uptime),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Cpu => compare_usage(&a.cpu, &b.cpu),
        SortKey::Ram => compare_usage(&a.ram, &b.ram),
    }
}

/// Total order over containers: the key first, then ascending id. A
/// reversed direction flips the whole comparison, tie-break included.
pub fn compare(a: &ContainerRecord, b: &ContainerRecord, order: SortOrder) -> Ordering {
    let ord = primary(a, b, order.key).then_with(|| a.id.cmp(&b.id));
    match order.direction {
        SortDirection::Forward => ord,
        SortDirection::Reversed => ord.reverse(),
    }
}
