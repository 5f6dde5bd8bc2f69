//! Exhaustive checks over every swizzle selection of a `UInt3`

use sv_vector::{Component, Naming, Swizzle, UInt3, WritableSwizzle};

fn all_selections<const N: usize>() -> Vec<[Component; N]> {
    let total = 3usize.pow(N as u32);
    (0..total)
        .map(|mut n| {
            let mut lanes = [Component::X; N];
            for lane in lanes.iter_mut().rev() {
                *lane = Component::ALL[n % 3];
                n /= 3;
            }
            lanes
        })
        .collect()
}

fn has_repeat(lanes: &[Component]) -> bool {
    lanes
        .iter()
        .enumerate()
        .any(|(i, a)| lanes[i + 1..].contains(a))
}

#[test]
fn test_selection_counts() {
    assert_eq!(all_selections::<2>().len(), 9);
    assert_eq!(all_selections::<3>().len(), 27);
    assert_eq!(all_selections::<4>().len(), 81);

    let writable3 = all_selections::<3>()
        .into_iter()
        .filter(|l| Swizzle::new(*l).is_writable())
        .count();
    assert_eq!(writable3, 6);

    assert!(all_selections::<4>()
        .into_iter()
        .all(|l| !Swizzle::new(l).is_writable()));
}

#[test]
fn test_reads_follow_selection_order() {
    let v = UInt3::new(11, 22, 33);
    for lanes in all_selections::<4>() {
        let expected = lanes.map(|c| [11, 22, 33][c.index()]);
        assert_eq!(v.swizzle(Swizzle::new(lanes)), expected);
    }
}

#[test]
fn test_only_repeat_free_selections_are_writable() {
    for lanes in all_selections::<3>() {
        let sel = Swizzle::new(lanes);
        assert_eq!(sel.writable().is_ok(), !has_repeat(&lanes), "{}", sel);
    }
    for lanes in all_selections::<2>() {
        let sel = Swizzle::new(lanes);
        assert_eq!(sel.writable().is_ok(), !has_repeat(&lanes), "{}", sel);
    }
}

#[test]
fn test_writes_land_in_selected_lanes() {
    for lanes in all_selections::<3>() {
        let Ok(sel) = Swizzle::new(lanes).writable() else {
            continue;
        };
        let mut v = UInt3::ZERO;
        v.set_swizzle(sel, [100, 200, 300]);
        for (i, c) in lanes.iter().enumerate() {
            assert_eq!(v[*c], [100, 200, 300][i], "{}", sel);
        }
        assert_eq!(v.swizzle(sel.selector()), [100, 200, 300]);
    }
}

#[test]
fn test_parse_matches_named_accessors() {
    let v = UInt3::new(1, 2, 3);

    let sel: Swizzle<3> = "zxy".parse().unwrap();
    assert_eq!(UInt3::from(v.swizzle(sel)), v.zxy());

    let sel: Swizzle<2> = "bb".parse().unwrap();
    assert_eq!(sel.naming(), Naming::Color);
    assert_eq!(sel.to_string(), "bb");
    assert_eq!(v.swizzle(sel), v.bb().to_array());

    let sel: WritableSwizzle<2> = "gr".parse().unwrap();
    let mut w = v;
    w.set_swizzle(sel, [8, 9]);
    let mut expected = v;
    expected.set_gr(sv_vector::UInt2::new(8, 9));
    assert_eq!(w, expected);
}

#[test]
fn test_selector_text_roundtrip() {
    for lanes in all_selections::<4>() {
        for naming in [Naming::Position, Naming::Color] {
            let sel = Swizzle::new(lanes).with_naming(naming);
            let parsed: Swizzle<4> = sel.to_string().parse().unwrap();
            assert_eq!(parsed, sel);
        }
    }
}
