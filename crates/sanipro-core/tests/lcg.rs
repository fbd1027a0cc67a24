use sanipro_core::lcg::Lcg;

#[test]
fn same_seed_same_sequence() {
    let mut a = Lcg::new(42);
    let mut b = Lcg::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn values_stay_below_modulus() {
    let mut lcg = Lcg::new(7);
    for _ in 0..1000 {
        assert!(lcg.next_u32() < (1 << 31));
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut items: Vec<u32> = (0..20).collect();
    Lcg::new(1).shuffle(&mut items);
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());
}

#[test]
fn shuffle_is_reproducible() {
    let mut a: Vec<u32> = (0..10).collect();
    let mut b = a.clone();
    Lcg::new(99).shuffle(&mut a);
    Lcg::new(99).shuffle(&mut b);
    assert_eq!(a, b);
}

#[test]
fn known_sequence_from_zero_seed() {
    let mut lcg = Lcg::new(0);
    assert_eq!(lcg.next_u32(), 12_345);
    assert_eq!(lcg.next_u32(), 1_406_932_606);
}

#[test]
fn seed_is_reduced_modulo_two_pow_31() {
    let mut a = Lcg::new(1 << 31);
    let mut b = Lcg::new(0);
    assert_eq!(a.next_u32(), b.next_u32());
}

#[test]
fn known_shuffle_order() {
    let mut items: Vec<u32> = (0..6).collect();
    Lcg::new(7).shuffle(&mut items);
    assert_eq!(items, vec![1, 4, 5, 2, 3, 0]);
}
