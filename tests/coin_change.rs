//! Property checks for the greedy and optimal change solvers over random inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use coinchange::{
    compare_change, count_change_ways, greedy_change, optimal_change, Denominations, Error,
    MinCoinTable,
};

fn random_denominations(rng: &mut StdRng, with_one: bool) -> Vec<usize> {
    let len = rng.gen_range(1..=5);
    let mut coins: Vec<usize> = (0..len).map(|_| rng.gen_range(2..=30)).collect();
    if with_one {
        let at = rng.gen_range(0..=coins.len());
        coins.insert(at, 1);
    }
    coins
}

/// Exhaustive minimum for small amounts, independent of the table code.
fn brute_force_min(amount: usize, coins: &[usize]) -> Option<usize> {
    // Enumerates multisets only: coin indices never decrease along a path.
    fn go(remaining: usize, coins: &[usize], start: usize, used: usize, best: &mut Option<usize>) {
        if remaining == 0 {
            if best.map_or(true, |b| used < b) {
                *best = Some(used);
            }
            return;
        }
        if best.map_or(false, |b| used + 1 >= b) {
            return;
        }
        for (i, &coin) in coins.iter().enumerate().skip(start) {
            if coin <= remaining {
                go(remaining - coin, coins, i, used + 1, best);
            }
        }
    }
    let mut distinct = coins.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let mut best = None;
    go(amount, &distinct, 0, 0, &mut best);
    best
}

#[test]
fn test_always_feasible_with_unit_coin() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let coins = random_denominations(&mut rng, true);
        let amount = rng.gen_range(0..=500);
        let change = optimal_change(amount, &coins).unwrap();
        assert!(change.is_possible(), "{amount} with {coins:?}");
        assert_eq!(change.coins_used.iter().sum::<usize>(), amount);
        assert_eq!(change.min_coins, Some(change.coins_used.len()));
    }
}

#[test]
fn test_optimal_never_worse_than_exact_greedy() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let with_one = rng.gen_bool(0.5);
        let coins = random_denominations(&mut rng, with_one);
        let amount = rng.gen_range(0..=300);
        let greedy = greedy_change(amount, &coins).unwrap();
        let optimal = optimal_change(amount, &coins).unwrap();

        assert_eq!(
            greedy.coins_used.iter().sum::<usize>() + greedy.remaining_amount,
            amount
        );
        if greedy.is_exact() {
            let min = optimal.min_coins.expect("greedy found exact change");
            assert!(min <= greedy.coin_count());
        }
        if let Some(min) = optimal.min_coins {
            assert_eq!(optimal.coins_used.iter().sum::<usize>(), amount);
            assert_eq!(optimal.coins_used.len(), min);
            assert!(optimal.coins_used.iter().all(|c| coins.contains(c)));
        }
    }
}

#[test]
fn test_matches_brute_force_on_small_amounts() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let coins = random_denominations(&mut rng, false);
        let amount = rng.gen_range(0..=40);
        let optimal = optimal_change(amount, &coins).unwrap();
        assert_eq!(
            optimal.min_coins,
            brute_force_min(amount, &coins),
            "{amount} with {coins:?}"
        );
    }
}

#[test]
fn test_greedy_descending_order() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let coins = random_denominations(&mut rng, true);
        let amount = rng.gen_range(0..=200);
        let greedy = greedy_change(amount, &coins).unwrap();
        assert!(greedy.coins_used.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(greedy.remaining_amount, 0);
    }
}

#[test]
fn test_illustrative_scenarios() {
    let us = [1, 5, 10, 25, 50, 100];
    let comparison = compare_change(93, &us).unwrap();
    assert_eq!(
        comparison.greedy.coin_count(),
        comparison.optimal.min_coins.unwrap()
    );

    let greedy = greedy_change(6, &[1, 3, 4]).unwrap();
    let optimal = optimal_change(6, &[1, 3, 4]).unwrap();
    assert_eq!(greedy.coins_used, vec![4, 1, 1]);
    assert_eq!(optimal.coins_used, vec![3, 3]);

    let greedy = greedy_change(7, &[3, 5]).unwrap();
    let optimal = optimal_change(7, &[3, 5]).unwrap();
    assert!(greedy.remaining_amount > 0);
    assert!(!optimal.is_possible());

    let greedy = greedy_change(0, &[3, 5]).unwrap();
    let optimal = optimal_change(0, &[3, 5]).unwrap();
    assert!(greedy.coins_used.is_empty());
    assert_eq!(greedy.remaining_amount, 0);
    assert!(optimal.coins_used.is_empty());
    assert_eq!(optimal.min_coins, Some(0));
}

#[test]
fn test_repeated_calls_are_identical() {
    let coins = [1, 7, 10, 22];
    assert_eq!(
        greedy_change(73, &coins).unwrap(),
        greedy_change(73, &coins).unwrap()
    );
    assert_eq!(
        optimal_change(73, &coins).unwrap(),
        optimal_change(73, &coins).unwrap()
    );
}

#[test]
fn test_table_answers_every_sub_amount() {
    let coins = Denominations::new(&[1, 3, 4]).unwrap();
    let table = MinCoinTable::build(40, &coins).unwrap();
    for sub_amount in 0..=40 {
        let standalone = optimal_change(sub_amount, coins.as_slice()).unwrap();
        assert_eq!(table.min_coins(sub_amount), standalone.min_coins);
        assert_eq!(
            table.reconstruct(sub_amount),
            Some(standalone.coins_used.clone())
        );
    }
}

#[test]
fn test_count_ways_standard_coins() {
    // 292 ways to make a dollar from coins up to a half-dollar, plus the dollar coin itself
    assert_eq!(
        count_change_ways(100, &[1, 5, 10, 25, 50, 100]).unwrap(),
        293
    );
    assert_eq!(count_change_ways(100, &[1, 5, 10, 25, 50]).unwrap(), 292);
}

#[test]
fn test_invalid_inputs_fail_fast() {
    assert!(matches!(greedy_change(10, &[]), Err(Error::InvalidInput(_))));
    assert!(matches!(
        optimal_change(10, &[0]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        count_change_ways(10, &[]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        Denominations::from_signed(&[5, -1]),
        Err(Error::InvalidInput(_))
    ));
}
