use mediamix::{clamp_percent, composite_improvement, set_allocation, AllocationSet, Channel, ChannelRateTable};
use proptest::prelude::*;

#[test]
fn test_full_share_on_ooh_zeroes_everything_else() {
    for start in [
        AllocationSet::new(25, 25, 25, 25),
        AllocationSet::new(0, 0, 0, 100),
        AllocationSet::new(97, 1, 1, 1),
    ] {
        assert_eq!(
            set_allocation(start, Channel::Ooh, 100.0),
            AllocationSet::new(100, 0, 0, 0)
        );
    }
}

#[test]
fn test_clamp_examples() {
    assert_eq!(clamp_percent(105.0), 100);
    assert_eq!(clamp_percent(-5.0), 0);
    assert_eq!(clamp_percent(49.6), 50);
    assert_eq!(clamp_percent(f64::NAN), 0);
}

#[test]
fn test_slider_walk_then_score() {
    let rates = ChannelRateTable::default();
    let mut alloc = AllocationSet::default();
    for (channel, value) in [
        (Channel::Ctv, 30.0),
        (Channel::Tv, 10.0),
        (Channel::Digital, 45.0),
    ] {
        alloc = set_allocation(alloc, channel, value);
        assert_eq!(alloc.total(), 100);
    }
    assert_eq!(alloc.get(Channel::Digital), 45);

    let score = composite_improvement(&alloc, &rates);
    assert!(score > composite_improvement(&AllocationSet::default(), &rates));
}

fn channel() -> impl Strategy<Value = Channel> {
    prop::sample::select(Channel::ALL.to_vec())
}

proptest! {
    #[test]
    fn slider_sequences_keep_total_at_100(
        steps in prop::collection::vec((channel(), -20.0..120.0f64), 1..60),
    ) {
        let mut alloc = AllocationSet::default();
        for (channel, value) in steps {
            alloc = set_allocation(alloc, channel, value);
            prop_assert_eq!(alloc.total(), 100);
        }
    }

    #[test]
    fn untouched_channels_keep_their_order(
        start in prop::array::uniform4(1u8..=100),
        channel in channel(),
        value in 0.0..=100.0f64,
    ) {
        // Proportional rescaling never swaps two other channels by more than
        // the one-point rounding correction
        let start = AllocationSet::from_values(start);
        let next = set_allocation(start, channel, value);
        let others = channel.others();
        for a in others {
            for b in others {
                if start.get(a) > start.get(b) {
                    prop_assert!(i32::from(next.get(a)) + 1 >= i32::from(next.get(b)));
                }
            }
        }
    }
}
