#[cfg(test)]
mod tests {
    use typecover_chart::{Categories, Effectiveness, Type, TypeChart};

    use crate::{
        CoverageMode, DefenseRule, OFFENSIVE_SEED, SearchConfig, Solution, find_type_coverage,
        is_covered,
    };

    /// 0 beats 1, 1 beats 2, 2 beats 0, everything else neutral
    fn cycle_chart() -> TypeChart {
        let mut rows = vec![vec![Effectiveness::Normal; 3]; 3];
        rows[0][1] = Effectiveness::Strong;
        rows[1][2] = Effectiveness::Strong;
        rows[2][0] = Effectiveness::Strong;
        TypeChart::from_rows(Categories::new(["Rock", "Paper", "Scissors"]), rows).unwrap()
    }

    /// Category 1 is immune to itself, everything else neutral
    fn self_immune_chart() -> TypeChart {
        let mut rows = vec![vec![Effectiveness::Normal; 4]; 4];
        rows[1][1] = Effectiveness::Immune;
        TypeChart::from_rows(Categories::new(["A", "B", "C", "D"]), rows).unwrap()
    }

    fn indices(solutions: &crate::Solutions) -> Vec<Vec<usize>> {
        solutions.iter().map(|s| s.indices().to_vec()).collect()
    }

    #[test]
    fn test_cycle_needs_all_three() {
        let chart = cycle_chart();
        let config = SearchConfig::offense().with_seed(Solution::new());

        let solutions = find_type_coverage(&chart, &config);
        assert_eq!(indices(&solutions), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_cycle_with_default_seed_skips_category_zero() {
        // Seeded at {1}, category 0 can never be added, so 1 stays uncovered
        let chart = cycle_chart();
        let solutions = find_type_coverage(&chart, &SearchConfig::offense());
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_self_immune_category_is_the_only_defense() {
        let chart = self_immune_chart();
        let solutions = find_type_coverage(&chart, &SearchConfig::defense());

        assert_eq!(indices(&solutions), vec![vec![1]]);
        assert!(solutions.iter().all(|s| s.includes(1)));
    }

    #[test]
    fn test_self_immune_every_attacker_has_no_solution() {
        let chart = self_immune_chart();
        let config = SearchConfig::defense().with_defense_rule(DefenseRule::EveryAttacker);
        assert!(find_type_coverage(&chart, &config).is_empty());
    }

    #[test]
    fn test_standard_offense() {
        let chart = TypeChart::standard();
        let mut solutions = find_type_coverage(&chart, &SearchConfig::offense());

        assert_eq!(solutions.len(), 3599);
        // depth-first order before sorting
        assert_eq!(
            solutions.first().unwrap().indices(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );

        solutions.sort_by_size();
        let smallest = solutions.iter().filter(|s| s.len() == 7).count();
        assert_eq!(smallest, 10);
        assert_eq!(solutions.first().unwrap().len(), 7);
        assert_eq!(solutions.iter().last().unwrap().len(), 15);
        assert_eq!(
            solutions
                .first()
                .unwrap()
                .display(chart.categories())
                .to_string(),
            "Fighting Flying Poison Ground Ghost Grass Ice"
        );
    }

    #[test]
    fn test_standard_offense_invariants() {
        let chart = TypeChart::standard();
        let config = SearchConfig::offense();
        let solutions = find_type_coverage(&chart, &config);

        for solution in &solutions {
            assert!(solution.is_strictly_increasing(), "{solution:?}");
            assert_eq!(solution.indices()[0], OFFENSIVE_SEED, "{solution:?}");
            assert!(!solution.includes(Type::Normal.index()), "{solution:?}");
            assert!(is_covered(&chart, &config, solution.indices()), "{solution:?}");
        }
    }

    #[test]
    fn test_standard_offense_solutions_are_distinct() {
        let chart = TypeChart::standard();
        let solutions = find_type_coverage(&chart, &SearchConfig::offense());

        let unique: std::collections::HashSet<&Solution> = solutions.iter().collect();
        assert_eq!(unique.len(), solutions.len());
    }

    #[test]
    fn test_standard_offense_names_round_trip() {
        let chart = TypeChart::standard();
        let solutions = find_type_coverage(&chart, &SearchConfig::offense());

        for solution in solutions.iter().take(50) {
            let line = solution.display(chart.categories()).to_string();
            let parsed = Solution::parse_names(&line, chart.categories()).unwrap();
            assert_eq!(&parsed, solution);
        }
    }

    #[test]
    fn test_standard_defense_members() {
        // Every type resists something, so each single type is its own answer
        let chart = TypeChart::standard();
        let solutions = find_type_coverage(&chart, &SearchConfig::defense());

        let expected: Vec<Vec<usize>> = (0..Type::COUNT).map(|i| vec![i]).collect();
        assert_eq!(indices(&solutions), expected);
    }

    #[test]
    fn test_standard_defense_every_attacker() {
        let chart = TypeChart::standard();
        let config = SearchConfig::defense().with_defense_rule(DefenseRule::EveryAttacker);
        let mut solutions = find_type_coverage(&chart, &config);
        solutions.sort_by_size();

        assert_eq!(solutions.len(), 35397);
        let smallest: Vec<String> = solutions
            .iter()
            .take_while(|s| s.len() == 4)
            .map(|s| s.display(chart.categories()).to_string())
            .collect();
        assert_eq!(
            smallest,
            vec!["Flying Steel Dragon Dark", "Bug Steel Dragon Dark"]
        );
    }

    #[test]
    fn test_full_universe_satisfies_every_predicate() {
        let chart = TypeChart::standard();
        let all: Vec<usize> = (0..chart.len()).collect();

        assert!(is_covered(&chart, &SearchConfig::offense(), &all));
        assert!(is_covered(&chart, &SearchConfig::defense(), &all));
        assert!(is_covered(
            &chart,
            &SearchConfig::defense().with_defense_rule(DefenseRule::EveryAttacker),
            &all
        ));
    }

    #[test]
    fn test_seeded_search_keeps_seed() {
        let chart = TypeChart::standard();
        let seed = Solution::from_indices(&[Type::Fighting.index(), Type::Flying.index()]);
        let solutions = find_type_coverage(&chart, &SearchConfig::offense().with_seed(seed));

        assert_eq!(solutions.len(), 1824);
        assert!(
            solutions
                .iter()
                .all(|s| s.indices().starts_with(&[1, 2]))
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.mode, CoverageMode::Offense);
        assert_eq!(config.defense_rule, DefenseRule::Members);
        assert_eq!(config.seed, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_solution_serde() {
        let solution = Solution::from_indices(&[1, 14]);
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, "[1,14]");
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);

        let rule: DefenseRule = serde_json::from_str("\"EveryAttacker\"").unwrap();
        assert_eq!(rule, DefenseRule::EveryAttacker);
    }
}
