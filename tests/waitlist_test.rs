#[cfg(test)]
mod tests {
    use trimed::triage::waitlist::{WaitlistEntry, order};
    use trimed::Priority;

    fn entry(cpf: &str, name: &str, priority: Priority) -> WaitlistEntry {
        WaitlistEntry::new(cpf.to_string(), name.to_string(), priority)
    }

    #[test]
    fn test_orders_by_priority_rank() {
        let ordered = order(vec![
            entry("1", "A", Priority::NotUrgent),
            entry("2", "B", Priority::Emergency),
            entry("3", "C", Priority::Urgent),
            entry("4", "D", Priority::Emergency),
        ]);

        let names: Vec<&str> = ordered.iter().map(|e| e.name.as_str()).collect();
        // B and D share a priority and keep their relative input order
        assert_eq!(names, vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_equal_priorities_keep_input_order() {
        let ordered = order(vec![
            entry("10", "Zoe", Priority::Urgent),
            entry("11", "Ada", Priority::Urgent),
            entry("12", "Mia", Priority::Urgent),
        ]);
        let cpfs: Vec<&str> = ordered.iter().map(|e| e.cpf.as_str()).collect();
        assert_eq!(cpfs, vec!["10", "11", "12"]);
    }

    #[test]
    fn test_rank_table() {
        assert_eq!(Priority::Emergency.rank(), 1);
        assert_eq!(Priority::VeryUrgent.rank(), 2);
        assert_eq!(Priority::Urgent.rank(), 3);
        assert_eq!(Priority::SlightlyUrgent.rank(), 4);
        assert_eq!(Priority::NotUrgent.rank(), 5);
    }

    #[test]
    fn test_unrecognized_labels_rank_last() {
        // Labels are closed at the parse boundary: anything unknown enters
        // as NotUrgent and therefore sorts last instead of crashing or
        // disappearing from the list.
        assert_eq!(Priority::from("Misspelled"), Priority::NotUrgent);
        assert_eq!(Priority::from(""), Priority::NotUrgent);

        let ordered = order(vec![
            entry("1", "A", Priority::from("nonsense")),
            entry("2", "B", Priority::from("Emergency")),
        ]);
        assert_eq!(ordered[0].name, "B");
        assert_eq!(ordered[1].name, "A");
        assert_eq!(ordered.len(), 2);
    }

    #[test]
    fn test_accepts_original_portuguese_labels() {
        assert_eq!(Priority::from("Emergencia"), Priority::Emergency);
        assert_eq!(Priority::from("Muito Urgente"), Priority::VeryUrgent);
        assert_eq!(Priority::from("Urgente"), Priority::Urgent);
        assert_eq!(Priority::from("Pouco Urgente"), Priority::SlightlyUrgent);
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let input = vec![
            entry("1", "A", Priority::SlightlyUrgent),
            entry("2", "B", Priority::VeryUrgent),
            entry("3", "C", Priority::NotUrgent),
            entry("4", "D", Priority::VeryUrgent),
            entry("5", "E", Priority::Emergency),
        ];
        assert_eq!(order(input.clone()), order(input));
    }
}
