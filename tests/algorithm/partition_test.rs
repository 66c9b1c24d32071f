#[cfg(test)]
mod tests {
    use group_balancer::algorithm::partition::{
        GreedyPartitioner, Move, MovePolicy, PartitionConfig, PartitionState,
    };
    use group_balancer::{Assignment, Class, Group, SiblingCluster};
    use std::time::Duration;

    fn class(id: &str, members: &[&str]) -> Class {
        Class::new(id, id, members.iter().map(|m| (*m).to_string()).collect())
    }

    fn state(num_groups: u8, labels: &[(&str, u8)]) -> PartitionState {
        let assignment = Assignment::from_labels(
            num_groups,
            labels
                .iter()
                .map(|(id, label)| ((*id).to_string(), Group(*label))),
        )
        .unwrap();
        PartitionState::new(assignment)
    }

    #[test]
    fn test_fixed_seed_runs_are_identical() {
        let classes = vec![
            class("A", &["s1", "s2", "s3", "s4", "s5"]),
            class("B", &["s1", "s2", "s6"]),
        ];
        let config = PartitionConfig::builder()
            .num_groups(3)
            .iterations(40)
            .random_seed(42)
            .build();

        let first = GreedyPartitioner::new(classes.clone(), config.clone())
            .unwrap()
            .run();
        let second = GreedyPartitioner::new(classes, config).unwrap().run();

        assert_eq!(first.assignment, second.assignment);
        assert_eq!(
            first.summary.iterations_run,
            second.summary.iterations_run
        );
    }

    #[test]
    fn test_iteration_budget_is_exhausted() {
        // Four members over three groups can never be flat, so the search
        // cannot converge and must spend the whole budget.
        let classes = vec![class("A", &["s1", "s2", "s3", "s4"])];
        let config = PartitionConfig::builder()
            .num_groups(3)
            .iterations(10)
            .random_seed(7)
            .build();

        let result = GreedyPartitioner::new(classes, config).unwrap().run();

        assert_eq!(result.summary.iterations_run, 10);
        assert_eq!(result.summary.moves_applied, 10);
        assert_eq!(result.summary.moves_reverted, 0);
    }

    #[test]
    fn test_search_stops_once_within_tolerance() {
        // Two members, two groups: at most one move reaches a flat count
        // vector, after which no class exceeds the tolerance.
        let classes = vec![class("A", &["s1", "s2"])];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .iterations(100)
            .random_seed(11)
            .build();

        let result = GreedyPartitioner::new(classes, config).unwrap().run();

        assert!(result.summary.iterations_run <= 1);
        assert_eq!(result.summary.final_imbalance, 0.0);
    }

    #[test]
    fn test_balanced_state_proposes_nothing() {
        let classes = vec![
            class("A", &["s1", "s2", "s3", "s4"]),
            class("B", &["s1", "s2"]),
        ];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .random_seed(3)
            .build();
        let mut partitioner = GreedyPartitioner::new(classes, config).unwrap();

        let state = state(2, &[("s1", 0), ("s2", 1), ("s3", 0), ("s4", 1)]);

        assert_eq!(partitioner.total_imbalance(state.assignment()), 0.0);
        assert!(partitioner.propose(&state).is_none());
    }

    #[test]
    fn test_proposal_targets_the_worst_class() {
        let classes = vec![
            class("A", &["a1", "a2"]),
            class("B", &["b1", "b2", "b3"]),
        ];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .random_seed(5)
            .build();
        let mut partitioner = GreedyPartitioner::new(classes, config).unwrap();

        let state = state(
            2,
            &[("a1", 0), ("a2", 1), ("b1", 0), ("b2", 0), ("b3", 0)],
        );

        let proposed = partitioner.propose(&state).unwrap();
        assert_eq!(proposed.class_id, "B");
        assert_eq!(proposed.from, Group(0));
        assert_eq!(proposed.to, Group(1));
        assert_eq!(proposed.members.len(), 1);
        assert!(proposed.members[0].starts_with('b'));
    }

    #[test]
    fn test_equal_imbalance_keeps_first_class() {
        let classes = vec![class("A", &["a1", "a2"]), class("B", &["b1", "b2"])];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .random_seed(5)
            .build();
        let mut partitioner = GreedyPartitioner::new(classes, config).unwrap();

        let state = state(2, &[("a1", 0), ("a2", 0), ("b1", 1), ("b2", 1)]);

        let proposed = partitioner.propose(&state).unwrap();
        assert_eq!(proposed.class_id, "A");
    }

    #[test]
    fn test_apply_relabels_the_members() {
        let mut target = state(2, &[("s1", 0), ("s2", 0)]);
        let proposed = Move {
            members: vec!["s1".to_string()].into(),
            class_id: "A".to_string(),
            from: Group(0),
            to: Group(1),
        };

        GreedyPartitioner::apply(&mut target, &proposed);

        let assignment = target.into_assignment();
        assert_eq!(assignment.get("s1"), Some(Group(1)));
        assert_eq!(assignment.get("s2"), Some(Group(0)));
    }

    #[test]
    fn test_improving_policy_never_worsens_the_total() {
        let classes = vec![
            class("A", &["s1", "s2", "s3", "s4", "s5"]),
            class("B", &["s1", "s2", "s3"]),
            class("C", &["s4", "s5", "s6", "s7"]),
        ];
        let config = PartitionConfig::builder()
            .num_groups(3)
            .iterations(60)
            .move_policy(MovePolicy::Improving)
            .random_seed(19)
            .build();

        let result = GreedyPartitioner::new(classes, config).unwrap().run();

        assert!(result.summary.final_imbalance <= result.summary.initial_imbalance);
        assert_eq!(
            result.summary.moves_applied + result.summary.moves_reverted,
            result.summary.iterations_run
        );
    }

    #[test]
    fn test_sibling_clusters_stay_monochromatic() {
        let classes = vec![
            class("A", &["a", "b", "c", "d"]),
            class("B", &["a", "c", "e"]),
        ];
        let cluster = SiblingCluster::new(vec!["a".to_string(), "b".to_string()]);
        let config = PartitionConfig::builder()
            .num_groups(2)
            .iterations(30)
            .respect_siblings(true)
            .random_seed(23)
            .build();

        let result = GreedyPartitioner::new(classes, config)
            .unwrap()
            .with_clusters(vec![cluster.clone()])
            .run();

        assert!(result.assignment.cluster_is_monochromatic(&cluster));
    }

    #[test]
    fn test_zero_time_budget_keeps_the_initial_assignment() {
        let classes = vec![class("A", &["s1", "s2", "s3", "s4"])];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .iterations(100)
            .time_budget(Duration::ZERO)
            .random_seed(31)
            .build();

        let result = GreedyPartitioner::new(classes, config).unwrap().run();

        assert_eq!(result.summary.iterations_run, 0);
        assert_eq!(result.assignment.len(), 4);
    }

    #[test]
    fn test_population_outside_classes_is_labeled() {
        let classes = vec![class("A", &["s1", "s2"])];
        let config = PartitionConfig::builder()
            .num_groups(2)
            .iterations(5)
            .random_seed(13)
            .build();

        let result = GreedyPartitioner::new(classes, config)
            .unwrap()
            .with_population(["lone".to_string()])
            .run();

        assert!(result.assignment.get("lone").is_some());
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let classes = vec![class("A", &["s1", "s2"])];

        let too_few_groups = PartitionConfig::builder().num_groups(1).build();
        assert!(GreedyPartitioner::new(classes.clone(), too_few_groups).is_err());

        let negative_tolerance = PartitionConfig::builder().tolerance(-0.5).build();
        assert!(GreedyPartitioner::new(classes, negative_tolerance).is_err());
    }
}
