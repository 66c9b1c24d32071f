#[cfg(test)]
mod tests {
    use group_balancer::registry::{
        load_class_map, load_schedule, load_sibling_pairs, load_students, retain_known_members,
    };
    use group_balancer::{Class, Error, Gender, Individual, Roster, SiblingCluster};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn cluster(members: &[&str]) -> SiblingCluster {
        SiblingCluster::new(members.iter().map(|m| (*m).to_string()).collect())
    }

    const STUDENTS_CSV: &str = concat!(
        "id,external,first,last,gender,grade\n",
        "s1,1001,Ada,Byron,Female,5\n",
        "s2,,Alan,Turing,Male,6\n",
        "s3,,June,Almeida,Female\n",
        "not-enough-columns\n",
        ",1003,No,Id,Male,5\n",
    );

    #[test]
    fn test_load_students_parses_rows() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "students.csv", STUDENTS_CSV);

        let roster = load_students(&path, None).unwrap();
        assert_eq!(roster.len(), 3);

        let ada = roster.get("s1").unwrap();
        assert_eq!(ada.external_id.as_deref(), Some("1001"));
        assert_eq!(ada.full_name(), "Ada Byron");
        assert_eq!(ada.gender, Gender::Female);
        assert_eq!(ada.grade.as_deref(), Some("5"));

        let alan = roster.get("s2").unwrap();
        assert!(alan.external_id.is_none());
        assert_eq!(alan.gender, Gender::Male);

        // five-column row, grade absent
        assert!(roster.get("s3").unwrap().grade.is_none());
    }

    #[test]
    fn test_load_students_with_quoted_fields() {
        let dir = TempDir::new().unwrap();
        let path = fixture(
            &dir,
            "students.csv",
            concat!(
                "id,external,first,last,gender,grade\n",
                "s1,1001,Robert,\"Smith, Jr.\",Male,5\n",
            ),
        );

        let roster = load_students(&path, None).unwrap();
        assert_eq!(roster.get("s1").unwrap().last_name, "Smith, Jr.");
    }

    #[test]
    fn test_load_students_filters_by_grade() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "students.csv", STUDENTS_CSV);

        let roster = load_students(&path, Some(&["5"])).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.contains("s1"));
        // rows outside the accepted grades, or without one, are dropped
        assert!(!roster.contains("s2"));
        assert!(!roster.contains("s3"));
    }

    #[test]
    fn test_load_sibling_pairs_groups_transitively() {
        let dir = TempDir::new().unwrap();
        let path = fixture(
            &dir,
            "siblings.csv",
            concat!(
                "id,first,last,related,related_first,related_last\n",
                "s1,Ada,Byron,s2,Grace,Hopper\n",
                "s2,Grace,Hopper,s3,Alan,Turing\n",
                "s4,Edith,Clarke,s5,June,Almeida\n",
            ),
        );

        let clusters = load_sibling_pairs(&path, None).unwrap();
        assert_eq!(
            clusters,
            vec![cluster(&["s1", "s2", "s3"]), cluster(&["s4", "s5"])]
        );
    }

    #[test]
    fn test_load_sibling_pairs_drops_pairs_outside_the_roster() {
        let dir = TempDir::new().unwrap();
        let path = fixture(
            &dir,
            "siblings.csv",
            concat!(
                "id,first,last,related,related_first,related_last\n",
                "s1,Ada,Byron,s2,Grace,Hopper\n",
                "s2,Grace,Hopper,ghost,No,Body\n",
            ),
        );

        let roster: Roster = [
            Individual::new("s1", Gender::Female),
            Individual::new("s2", Gender::Female),
        ]
        .into_iter()
        .collect();

        let clusters = load_sibling_pairs(&path, Some(&roster)).unwrap();
        assert_eq!(clusters, vec![cluster(&["s1", "s2"])]);
    }

    #[test]
    fn test_load_class_map_from_json() {
        let dir = TempDir::new().unwrap();
        let path = fixture(
            &dir,
            "classes.json",
            r#"{"Math": ["s2", "s1", "s2", 7], "Art": ["s3"]}"#,
        );

        let classes = load_class_map(&path).unwrap();
        let ids: Vec<&str> = classes.iter().map(|class| class.id.as_str()).collect();
        assert_eq!(ids, ["Art", "Math"]);

        assert_eq!(classes[0].members(), ["s3"]);
        // duplicate collapsed, non-string member skipped
        assert_eq!(classes[1].members(), ["s1", "s2"]);
        assert_eq!(classes[1].name, "Math");
    }

    #[test]
    fn test_load_class_map_rejects_non_list_values() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "classes.json", r#"{"Math": "s1"}"#);

        let result = load_class_map(&path);
        assert!(matches!(result, Err(Error::Schema { .. })));
    }

    #[test]
    fn test_load_schedule_groups_memberships() {
        let dir = TempDir::new().unwrap();
        let path = fixture(
            &dir,
            "schedule.csv",
            concat!(
                "id,class_1,name_1,class_2,name_2\n",
                "s1,c1,Algebra,c2,Choir\n",
                "s2,c1,Algebra II,,\n",
                "s3,c2,Choir,c1,\n",
                "s4,c3\n",
            ),
        );

        let classes = load_schedule(&path).unwrap();
        let ids: Vec<&str> = classes.iter().map(|class| class.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);

        assert_eq!(classes[0].members(), ["s1", "s2", "s3"]);
        // first name seen wins
        assert_eq!(classes[0].name, "Algebra");
        assert_eq!(classes[1].members(), ["s1", "s3"]);
        assert_eq!(classes[1].name, "Choir");
        // unnamed class falls back to its identifier
        assert_eq!(classes[2].name, "c3");
    }

    #[test]
    fn test_retain_known_members() {
        let roster: Roster = [
            Individual::new("s1", Gender::Male),
            Individual::new("s2", Gender::Female),
        ]
        .into_iter()
        .collect();

        let mut classes = vec![
            Class::new("A", "A", vec!["s1".to_string(), "ghost".to_string()]),
            Class::new("B", "B", vec!["s2".to_string(), "spook".to_string()]),
        ];

        let dropped = retain_known_members(&mut classes, &roster);
        assert_eq!(dropped, 2);
        assert_eq!(classes[0].members(), ["s1"]);
        assert_eq!(classes[1].members(), ["s2"]);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let result = load_class_map(Path::new("/nonexistent/classes.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
