//! Search engine runs over tightly bounded spaces, checked against a
//! straightforward re-enumeration through the public pipeline API.

use apsopt_lib::{
    run_search, Assembly, Catalog, DrawPrefix, SearchConfig, LENGTH_BUCKETS,
};

#[test]
fn single_assembly_sweep_finds_best_draw() {
    let config = SearchConfig {
        required_modules: vec!["SOLID BODY".to_string()],
        heads: vec!["ARMOR PIERCING HEAD".to_string()],
        max_rail_draw: 40,
        target_acs: vec![15.0],
        min_gauge: 100,
        max_gauge: 100,
        ..SearchConfig::default()
    };
    let outcome = run_search(Catalog::builtin(), &config).expect("search succeeds");

    // One assembly, draws 0..=40.
    assert_eq!(outcome.shells_tested, 41);

    let catalog = Catalog::builtin();
    let assembly = Assembly::new(
        100,
        0.0,
        0,
        vec![catalog.module("SOLID BODY").unwrap()],
        catalog.head("ARMOR PIERCING HEAD").unwrap(),
    )
    .unwrap();
    let expected = apsopt_lib::evaluate(&assembly, 40).unwrap().kinetic_dps(15.0);

    let table = &outcome.leaderboard.tables()[0];
    assert_eq!(table.target_ac, 15.0);
    for bucket in &table.buckets {
        // A 200 mm shell fits every loader.
        let best = bucket.best.as_ref().expect("bucket populated");
        assert_eq!(best.draw, 40);
        assert!((bucket.kinetic_dps - expected.dps).abs() < 1e-12);
        assert!(best.kinetic_dps_belt.is_some(), "belt stats at 100 mm");
        assert_eq!(best.modules, vec!["Solid Body", "AP Head"]);
    }
}

#[test]
fn leaderboard_matches_exhaustive_reenumeration() {
    let target_acs = [10.0, 60.0];
    let config = SearchConfig {
        required_modules: vec!["SOLID BODY".to_string()],
        heads: vec!["ARMOR PIERCING HEAD".to_string()],
        max_rail_draw: 10,
        max_gp_casings: 0.02,
        max_rg_casings: 1,
        target_acs: target_acs.to_vec(),
        min_gauge: 499,
        max_gauge: 500,
        ..SearchConfig::default()
    };
    let outcome = run_search(Catalog::builtin(), &config).expect("search succeeds");

    // Mirror the enumeration through the public pipeline API.
    let catalog = Catalog::builtin();
    let mut expected =
        vec![[0.0f64; LENGTH_BUCKETS.len()]; target_acs.len()];
    let mut pairs: u64 = 0;
    for gauge in 499..=500 {
        for gp_hundredths in 0..=2u32 {
            let gp = f64::from(gp_hundredths) / 100.0;
            for rg in 0..=1u32 {
                let assembly = Assembly::new(
                    gauge,
                    gp,
                    rg,
                    vec![catalog.module("SOLID BODY").unwrap()],
                    catalog.head("ARMOR PIERCING HEAD").unwrap(),
                )
                .unwrap();
                let prefix = DrawPrefix::evaluate(&assembly).unwrap();
                for draw in 0..=prefix.max_draw.min(10) {
                    pairs += 1;
                    let stats = prefix.at_draw(draw).unwrap();
                    for (ac_index, &ac) in target_acs.iter().enumerate() {
                        let dps = stats.kinetic_dps(ac).dps;
                        for (bucket_index, &ceiling) in LENGTH_BUCKETS.iter().enumerate() {
                            if stats.total_length <= ceiling
                                && dps > expected[ac_index][bucket_index]
                            {
                                expected[ac_index][bucket_index] = dps;
                            }
                        }
                    }
                }
            }
        }
    }

    assert_eq!(outcome.shells_tested, pairs);
    for (ac_index, table) in outcome.leaderboard.tables().iter().enumerate() {
        for (bucket_index, bucket) in table.buckets.iter().enumerate() {
            let want = expected[ac_index][bucket_index];
            assert!(
                (bucket.kinetic_dps - want).abs() < 1e-12,
                "ac {} bucket {} stored {} expected {}",
                table.target_ac,
                bucket.ceiling,
                bucket.kinetic_dps,
                want
            );
            assert_eq!(bucket.best.is_some(), want > 0.0);
        }
    }
}

#[test]
fn filler_only_bodies_are_always_populated() {
    let config = SearchConfig {
        filler_modules: vec!["SOLID BODY".to_string()],
        heads: vec!["ARMOR PIERCING HEAD".to_string()],
        max_rail_draw: 5,
        target_acs: vec![20.0],
        min_gauge: 500,
        max_gauge: 500,
        ..SearchConfig::default()
    };
    let outcome = run_search(Catalog::builtin(), &config).expect("search succeeds");

    let table = &outcome.leaderboard.tables()[0];
    let smallest = table.buckets[0]
        .best
        .as_ref()
        .expect("1000 mm bucket populated");
    // Only the single-body shell fits the 1000 mm loader at 500 mm gauge.
    assert_eq!(smallest.total_length, 1000);
    assert_eq!(smallest.modules, vec!["Solid Body", "AP Head"]);

    for bucket in &table.buckets {
        let best = bucket.best.as_ref().expect("bucket populated");
        assert!(best.total_length <= bucket.ceiling);
        assert!(best.modules.len() >= 2, "at least one body module plus head");
        assert_eq!(best.modules.last().unwrap(), "AP Head");
    }
}

#[test]
fn chemical_stats_ride_along_in_snapshots() {
    let config = SearchConfig {
        required_modules: vec!["CHEM BODY".to_string()],
        heads: vec!["CHEM HEAD".to_string()],
        max_rail_draw: 5,
        target_acs: vec![1.0],
        min_gauge: 500,
        max_gauge: 500,
        ..SearchConfig::default()
    };
    let outcome = run_search(Catalog::builtin(), &config).expect("search succeeds");
    let best = outcome.leaderboard.tables()[0].buckets[0]
        .best
        .as_ref()
        .expect("bucket populated");
    assert!(best.chemical_damage > 0.0);
    assert!(best.chemical_dps > 0.0);
}
