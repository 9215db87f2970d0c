use std::collections::BTreeMap;

use rand::Rng;
use tree_collections::bst::BstMap;

#[test]
fn test_random_operations() {
    let mut rng = rand::thread_rng();
    let mut map = BstMap::new();
    let mut expected: BTreeMap<u32, u32> = BTreeMap::new();

    for _ in 0..10_000 {
        let key = rng.gen::<u32>() % 2048;
        let value = rng.gen::<u32>();

        if expected.contains_key(&key) {
            assert!(map.insert(key, value).is_err());
        } else {
            assert!(map.insert(key, value).is_ok());
            expected.insert(key, value);
        }

        if rng.gen::<u32>() % 4 == 0 {
            let target = rng.gen::<u32>() % 2048;
            assert_eq!(
                map.remove(&target).is_ok(),
                expected.remove(&target).is_some(),
            );
        }

        assert_eq!(map.len(), expected.len());
    }

    let actual = map.iter().collect::<Vec<_>>();
    let wanted = expected.iter().collect::<Vec<_>>();
    assert_eq!(actual, wanted);

    for (key, value) in &expected {
        assert_eq!(map.get(key), Some(value));
    }
}

#[test]
fn test_degenerate_chain() {
    let mut map = BstMap::new();
    for key in 0..2000u32 {
        map.insert(key, key).unwrap();
    }

    assert_eq!(map.len(), 2000);
    assert_eq!(map.height(), 2000);
    assert_eq!(map.min(), Some(&0));
    assert_eq!(map.max(), Some(&1999));

    let keys = map.iter().map(|pair| *pair.0).collect::<Vec<u32>>();
    assert!(keys.windows(2).all(|window| window[0] < window[1]));

    for key in 0..2000u32 {
        assert_eq!(map.remove(&key), Ok((key, key)));
    }
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}
