use std::fmt;

use common::ApplianceEntry;
use tracing::{debug, trace};

use crate::number::format_number;

/// Stable identifier of an appliance in an [`ApplianceList`].
///
/// Ids are never reused, so a remove control rendered for one entry can never
/// hit a different entry after the list has shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rendered row of the appliance list.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceLine {
    pub id: EntryId,
    pub text: String,
}

/// Ordered appliance collection, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ApplianceList {
    entries: Vec<(EntryId, ApplianceEntry)>,
    next_id: u64,
}

impl ApplianceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: ApplianceEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        debug!("Adding appliance {} as #{}", entry.name, id);
        self.entries.push((id, entry));
        id
    }

    /// Removes the entry with `id`. Unknown ids leave the list untouched.
    pub fn remove(&mut self, id: EntryId) -> Option<ApplianceEntry> {
        let Some(position) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            debug!("Ignoring remove of unknown appliance #{}", id);
            return None;
        };
        let (_, entry) = self.entries.remove(position);
        debug!("Removed appliance {} (#{})", entry.name, id);
        Some(entry)
    }

    pub fn get(&self, id: EntryId) -> Option<&ApplianceEntry> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the entries in wire form, in list order.
    pub fn to_wire(&self) -> Vec<ApplianceEntry> {
        self.entries.iter().map(|(_, entry)| entry.clone()).collect()
    }

    /// Projects the whole list into display rows.
    pub fn render(&self) -> Vec<ApplianceLine> {
        trace!("Rendering {} appliances", self.entries.len());
        self.entries
            .iter()
            .map(|(id, entry)| ApplianceLine {
                id: *id,
                text: describe(entry),
            })
            .collect()
    }
}

/// `"Fan: 75W, 5 hrs/day, 30 days"`
pub fn describe(entry: &ApplianceEntry) -> String {
    format!(
        "{}: {}W, {} hrs/day, {} days",
        entry.name,
        format_number(entry.power_w),
        format_number(entry.hours_per_day),
        entry.days
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, power_w: f64, hours_per_day: f64, days: i64) -> ApplianceEntry {
        ApplianceEntry {
            name: name.to_string(),
            power_w,
            hours_per_day,
            days,
        }
    }

    fn texts(list: &ApplianceList) -> Vec<String> {
        list.render().into_iter().map(|line| line.text).collect()
    }

    #[test]
    fn test_fan_scenario() {
        let mut list = ApplianceList::new();
        let id = list.add(entry("Fan", 75.0, 5.0, 30));

        assert_eq!(texts(&list), vec!["Fan: 75W, 5 hrs/day, 30 days"]);

        let removed = list.remove(id).expect("fan should be removed");
        assert_eq!(removed.name, "Fan");
        assert!(list.render().is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn test_fractional_values_render_shortest() {
        let mut list = ApplianceList::new();
        list.add(entry("Lamp", 7.5, 0.25, 12));
        assert_eq!(texts(&list), vec!["Lamp: 7.5W, 0.25 hrs/day, 12 days"]);
    }

    #[test]
    fn test_extreme_values_render_in_exponent_form() {
        let mut list = ApplianceList::new();
        list.add(entry("X", 1e21, 1e-7, 30));
        assert_eq!(texts(&list), vec!["X: 1e+21W, 1e-7 hrs/day, 30 days"]);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut list = ApplianceList::new();
        let _a = list.add(entry("A", 1.0, 1.0, 30));
        let b = list.add(entry("B", 2.0, 1.0, 30));
        let _c = list.add(entry("C", 3.0, 1.0, 30));

        list.remove(b);

        assert_eq!(
            texts(&list),
            vec!["A: 1W, 1 hrs/day, 30 days", "C: 3W, 1 hrs/day, 30 days"]
        );
        assert!(list.get(b).is_none());
    }

    #[test]
    fn test_stale_id_cannot_remove_shifted_entry() {
        let mut list = ApplianceList::new();
        let a = list.add(entry("A", 1.0, 1.0, 30));
        let b = list.add(entry("B", 2.0, 1.0, 30));

        // Both remove controls were rendered before either click
        let rendered = list.render();
        assert_eq!(rendered[0].id, a);
        assert_eq!(rendered[1].id, b);

        assert!(list.remove(rendered[0].id).is_some());
        assert!(list.remove(rendered[0].id).is_none());
        assert_eq!(texts(&list), vec!["B: 2W, 1 hrs/day, 30 days"]);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = ApplianceList::new();
        let first = list.add(entry("A", 1.0, 1.0, 30));
        list.remove(first);
        let second = list.add(entry("B", 1.0, 1.0, 30));
        assert_ne!(first, second);
    }

    #[test]
    fn test_render_tracks_mutation_sequence() {
        let mut list = ApplianceList::new();
        let mut expected: Vec<(EntryId, String)> = Vec::new();

        for round in 0..12 {
            let name = format!("Device{}", round);
            let id = list.add(entry(&name, round as f64, 1.0, 30));
            expected.push((id, name));

            if round % 3 == 2 {
                let (victim, _) = expected.remove(round % expected.len());
                list.remove(victim);
            }

            let rendered = list.render();
            assert_eq!(rendered.len(), list.len());
            assert_eq!(rendered.len(), expected.len());
            for (line, (id, name)) in rendered.iter().zip(&expected) {
                assert_eq!(line.id, *id);
                assert!(line.text.starts_with(&format!("{}: ", name)));
            }
        }
    }

    #[test]
    fn test_to_wire_preserves_order() {
        let mut list = ApplianceList::new();
        list.add(entry("A", 1.0, 1.0, 30));
        list.add(entry("B", 2.0, 2.0, 15));

        let wire = list.to_wire();
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].name, "A");
        assert_eq!(wire[1].days, 15);
    }
}
