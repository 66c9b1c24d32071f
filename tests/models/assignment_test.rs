#[cfg(test)]
mod tests {
    use group_balancer::models::DEFAULT_GROUP_NAMES;
    use group_balancer::{
        Assignment, Class, Gender, Group, Individual, Roster, SiblingCluster,
    };

    fn individual(id: &str, gender: Gender) -> Individual {
        Individual::new(id, gender)
    }

    #[test]
    fn test_group_display_names() {
        assert_eq!(Group(0).display_name(), "Blue");
        assert_eq!(Group(1).display_name(), "Gold");
        assert_eq!(Group(2).display_name(), "Green");
        assert_eq!(
            Group(DEFAULT_GROUP_NAMES.len() as u8).display_name(),
            "Group 7"
        );
    }

    #[test]
    fn test_assignment_set_and_get() {
        let mut assignment = Assignment::new(3);
        assert!(assignment.is_empty());

        assignment.set("s1", Group(2));
        assignment.set("s2", Group(0));

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get("s1"), Some(Group(2)));
        assert_eq!(assignment.get("missing"), None);
    }

    #[test]
    fn test_from_labels_rejects_out_of_range() {
        let result = Assignment::from_labels(2, [("s1".to_string(), Group(2))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_iter_sorted_is_ordered_by_identifier() {
        let mut assignment = Assignment::new(2);
        assignment.set("zeta", Group(0));
        assignment.set("alpha", Group(1));
        assignment.set("mid", Group(0));

        let ids: Vec<&str> = assignment.iter_sorted().map(|(id, _)| id).collect();
        assert_eq!(ids, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_cluster_monochromatic_check() {
        let cluster = SiblingCluster::new(vec!["a".to_string(), "b".to_string()]);

        let mut assignment = Assignment::new(2);
        assignment.set("a", Group(0));
        assignment.set("b", Group(0));
        assert!(assignment.cluster_is_monochromatic(&cluster));

        assignment.set("b", Group(1));
        assert!(!assignment.cluster_is_monochromatic(&cluster));
    }

    #[test]
    fn test_unassigned_cluster_members_are_ignored() {
        let cluster = SiblingCluster::new(vec!["a".to_string(), "b".to_string()]);
        let mut assignment = Assignment::new(2);
        assignment.set("a", Group(1));

        assert!(assignment.cluster_is_monochromatic(&cluster));
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::from("Male"), Gender::Male);
        assert_eq!(Gender::from("m"), Gender::Male);
        assert_eq!(Gender::from("1"), Gender::Male);
        assert_eq!(Gender::from(" Female "), Gender::Female);
        assert_eq!(Gender::from("F"), Gender::Female);
        assert_eq!(Gender::from("other"), Gender::Unknown);

        assert_eq!(Gender::Male.letter(), "M");
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn test_class_members_are_sorted_and_unique() {
        let class = Class::new(
            "c1",
            "Math",
            vec![
                "s2".to_string(),
                "s1".to_string(),
                "s2".to_string(),
                "s3".to_string(),
            ],
        );

        assert_eq!(class.members(), ["s1", "s2", "s3"]);
        assert_eq!(class.len(), 3);
    }

    #[test]
    fn test_roster_lookup_and_subpopulation() {
        let roster: Roster = [
            individual("s1", Gender::Male),
            individual("s2", Gender::Female),
            individual("s3", Gender::Male),
        ]
        .into_iter()
        .collect();

        assert_eq!(roster.len(), 3);
        assert!(roster.contains("s2"));
        assert!(roster.get("s4").is_none());
        assert_eq!(roster.ids_sorted(), ["s1", "s2", "s3"]);

        let males = roster.subpopulation(Gender::Male);
        assert_eq!(males.len(), 2);
        assert!(males.contains("s1"));
        assert!(males.contains("s3"));
    }

    #[test]
    fn test_individual_full_name() {
        let mut person = individual("s1", Gender::Female);
        person.first_name = "Ada".to_string();
        person.last_name = "Lovelace".to_string();

        assert_eq!(person.full_name(), "Ada Lovelace");
        assert_eq!(individual("s2", Gender::Unknown).full_name(), "");
    }
}
