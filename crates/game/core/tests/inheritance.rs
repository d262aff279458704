use lineage_core::{
    Attribute, CharacterFactory, CharacterSpec, ClassCounts, ClassKind, CoreStats, GameConfig,
    Lineage, RngStream, ScriptedRng, Session, StatBonus, Tier, TierCounts,
};

/// Stream whose every percentile draw is 50, so no birth ever escalates.
fn normal_only() -> RngStream<ScriptedRng> {
    RngStream::new(ScriptedRng::new([50]), 0)
}

#[test]
fn empty_lineage_yields_zero_bonus() {
    let mut lineage = Lineage::new();
    let mut rng = RngStream::seeded(1);
    for _ in 0..10 {
        assert_eq!(lineage.inherited_bonus(&mut rng), StatBonus::ZERO);
    }
    assert_eq!(lineage.tier_counts(), TierCounts::default());
}

#[test]
fn single_ancestor_at_normal_tier() {
    let mut lineage = Lineage::new();
    let mut rng = normal_only();
    let ancestor = CharacterFactory::create(
        &mut lineage,
        &mut rng,
        CharacterSpec::new("A", ClassKind::Rogue, "swords", Attribute::Strength, "dual wielding"),
    );
    let (s, a, i) = (
        ancestor.stats().strength,
        ancestor.stats().agility,
        ancestor.stats().intellect,
    );
    assert_eq!((s, a, i), (5, 5, 4));
    lineage.register(ancestor);

    // round(0.25 × (S + 1)), round(0.25 × A), round(0.25 × I)
    assert_eq!(lineage.inherited_bonus(&mut rng), StatBonus::new(2, 1, 1));
}

#[test]
fn warrior_then_agile_child() {
    let mut lineage = Lineage::new();
    let mut rng = normal_only();

    let a = CharacterFactory::create(
        &mut lineage,
        &mut rng,
        CharacterSpec::new("A", ClassKind::Warrior, "axes", Attribute::Strength, "blocking"),
    );
    assert_eq!(a.stats(), CoreStats::new(7, 4, 3));
    lineage.register(a);

    let b = CharacterFactory::create(
        &mut lineage,
        &mut rng,
        CharacterSpec::new("B", ClassKind::Warrior, "lances", Attribute::Agility, "charging"),
    );
    assert_eq!(b.inheritance().bonus, StatBonus::new(2, 1, 1));
    let expected = ClassKind::Warrior
        .base_stats()
        .raised(Attribute::Agility, 1)
        .with_bonus(StatBonus::new(2, 1, 1));
    assert_eq!(b.stats(), expected);
    assert_eq!(b.stats(), CoreStats::new(8, 6, 4));
    lineage.register(b);

    assert_eq!(lineage.len(), 2);
    assert_eq!(
        lineage.class_counts(),
        ClassCounts {
            warriors: 2,
            rogues: 0,
            mages: 0
        }
    );
    assert_eq!(lineage.tier_counts().normal, 1);
}

#[test]
fn tier_counters_sum_to_rolls() {
    let mut session = Session::seeded(GameConfig::default().with_bootstrap_generations(300), 42);
    session.bootstrap(|_| {});

    let tiers = session.lineage().tier_counts();
    assert_eq!(tiers.total(), 299);
    let per_tier: u32 = Tier::ALL.iter().map(|tier| tiers.get(*tier)).sum();
    assert_eq!(per_tier, 299);

    let classes = session.lineage().class_counts();
    let per_class: u32 = ClassKind::ALL.iter().map(|class| classes.get(*class)).sum();
    assert_eq!(per_class, 300);
}

#[test]
fn counts_do_not_depend_on_creation_order() {
    let orders = [
        [ClassKind::Warrior, ClassKind::Mage, ClassKind::Rogue, ClassKind::Mage],
        [ClassKind::Mage, ClassKind::Mage, ClassKind::Rogue, ClassKind::Warrior],
    ];

    let counts: Vec<_> = orders
        .iter()
        .map(|order| {
            let mut session = Session::new(GameConfig::default(), normal_only());
            for class in order {
                session.birth(CharacterSpec::new("X", *class, "staves", Attribute::Intellect, "x"));
            }
            (session.lineage().class_counts(), session.lineage().tier_counts())
        })
        .collect();

    assert_eq!(counts[0], counts[1]);
    assert_eq!(counts[0].0.mages, 2);
    assert_eq!(counts[0].1.normal, 3);
}

#[test]
fn unleashed_birth_doubles_parent_stats() {
    let mut lineage = Lineage::new();
    let mut rng = RngStream::new(ScriptedRng::new([0]), 0);
    let parent = CharacterFactory::create(
        &mut lineage,
        &mut rng,
        CharacterSpec::new("P", ClassKind::Mage, "tomes", Attribute::Intellect, "tome reading"),
    );
    lineage.register(parent);

    let child = CharacterFactory::create(
        &mut lineage,
        &mut rng,
        CharacterSpec::new("C", ClassKind::Mage, "tomes", Attribute::Intellect, "tome reading"),
    );

    // parent (3, 4, 7), heritable (3, 4, 8), weight 2
    assert_eq!(child.inheritance().tier, Some(Tier::Unleashed));
    assert_eq!(child.inheritance().bonus, StatBonus::new(6, 8, 16));
    assert_eq!(lineage.tier_counts().unleashed, 1);
}
