#[cfg(test)]
mod tests {
    use group_balancer::algorithm::balance::{
        self, BalanceWeights, sample_variance, subpopulation_deviation,
    };
    use group_balancer::{Assignment, Class, Group};
    use rustc_hash::FxHashSet;

    fn class(id: &str, members: &[&str]) -> Class {
        Class::new(id, id, members.iter().map(|m| (*m).to_string()).collect())
    }

    fn assignment(num_groups: u8, labels: &[(&str, u8)]) -> Assignment {
        let mut assignment = Assignment::new(num_groups);
        for (id, label) in labels {
            assignment.set((*id).to_string(), Group(*label));
        }
        assignment
    }

    #[test]
    fn test_variance_of_balanced_counts_is_zero() {
        assert_eq!(sample_variance(&[2, 2, 2]), 0.0);
    }

    #[test]
    fn test_variance_of_skewed_counts() {
        // mean 2, squared deviations 9 + 1 + 4, divided by k - 1 = 2
        assert_eq!(sample_variance(&[5, 1, 0]), 7.0);
    }

    #[test]
    fn test_variance_of_single_count_is_zero() {
        assert_eq!(sample_variance(&[5]), 0.0);
    }

    #[test]
    fn test_class_imbalance_counts_labels() {
        let class = class("c", &["s1", "s2", "s3", "s4"]);
        let assignment = assignment(2, &[("s1", 0), ("s2", 0), ("s3", 0), ("s4", 1)]);

        // counts [3, 1], mean 2, variance (1 + 1) / 1
        assert_eq!(balance::class_imbalance(&assignment, &class), 2.0);
    }

    #[test]
    fn test_unassigned_members_are_not_counted() {
        let class = class("c", &["s1", "s2", "missing"]);
        let assignment = assignment(2, &[("s1", 0), ("s2", 1)]);

        assert_eq!(balance::class_imbalance(&assignment, &class), 0.0);
    }

    #[test]
    fn test_subpopulation_deviation_at_half_split() {
        assert_eq!(subpopulation_deviation(&[4, 4], &[2, 2]), 0.0);
    }

    #[test]
    fn test_subpopulation_deviation_when_concentrated() {
        // (4 - 2)^2 + (0 - 2)^2
        assert_eq!(subpopulation_deviation(&[4, 4], &[4, 0]), 8.0);
    }

    #[test]
    fn test_secondary_imbalance_over_class() {
        let class = class("c", &["m1", "m2", "f1", "f2"]);
        let assignment = assignment(2, &[("m1", 0), ("m2", 1), ("f1", 0), ("f2", 1)]);
        let females: FxHashSet<String> =
            ["f1", "f2"].iter().map(|s| (*s).to_string()).collect();

        // each label holds 2 members, 1 of them female: deviation 0
        assert_eq!(
            balance::secondary_imbalance(&assignment, &class, &females),
            0.0
        );
    }

    #[test]
    fn test_total_imbalance_balanced_scenario() {
        // Two overlapping classes, alternating labels: both count vectors
        // are flat, so the total is already minimal.
        let classes = vec![
            class("A", &["s1", "s2", "s3", "s4"]),
            class("B", &["s1", "s2"]),
        ];
        let assignment = assignment(2, &[("s1", 0), ("s2", 1), ("s3", 0), ("s4", 1)]);

        let total =
            balance::total_imbalance(&assignment, &classes, None, BalanceWeights::default());
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_total_imbalance_applies_weights() {
        let classes = vec![class("A", &["s1", "s2", "s3", "s4"])];
        let assignment = assignment(2, &[("s1", 0), ("s2", 0), ("s3", 0), ("s4", 1)]);
        let weights = BalanceWeights {
            class_weight: 2.0,
            secondary_weight: 0.0,
        };

        // class variance 2.0, doubled by the weight
        let total = balance::total_imbalance(&assignment, &classes, None, weights);
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_empty_subpopulation_still_scores() {
        // `Some` of an empty set is data, not absence: every label's
        // sub-population count deviates from half its total.
        let classes = vec![class("A", &["s1", "s2", "s3", "s4"])];
        let assignment = assignment(2, &[("s1", 0), ("s2", 1), ("s3", 0), ("s4", 1)]);
        let empty = FxHashSet::default();

        let total = balance::total_imbalance(
            &assignment,
            &classes,
            Some(&empty),
            BalanceWeights::default(),
        );
        // class term 0, secondary term (0 - 1)^2 * 2 labels, halved
        assert_eq!(total, 1.0);
    }
}
