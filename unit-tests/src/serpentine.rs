use myrtio_matrix_composer::{BitOrder, Max7219Chain, PanelPosition};

use crate::support::{RecordingBus, Shifted, indexed_frame};

/// Transactions produced by one `show` of an indexed frame
fn shown<const X: usize, const Y: usize>() -> Vec<Vec<Shifted>> {
    let mut chain: Max7219Chain<_, X, Y> = Max7219Chain::new(RecordingBus::default());
    chain.show(&indexed_frame::<X, Y>()).unwrap();
    chain.bus().transactions.clone()
}

/// Pair sent to `segment` for pixel row `row`, with 16 panels in the chain
fn pair_for(transactions: &[Vec<Shifted>], segment: usize, row: usize) -> Shifted {
    let pairs = &transactions[row];
    pairs[pairs.len() - 1 - segment]
}

#[test]
fn four_by_four_panel_three_and_four() {
    let transactions = shown::<4, 4>();
    assert_eq!(transactions.len(), 8);

    for row in 0..8u8 {
        let r = usize::from(row);
        // last panel of band 0: mirrored read of column 0, MSB first
        assert_eq!(
            pair_for(&transactions, 3, r),
            Shifted {
                address: 1 + row,
                data: 4 * row,
                order: BitOrder::MsbFirst,
            }
        );
        // first panel of band 1: direct read of column 0, LSB first
        assert_eq!(
            pair_for(&transactions, 4, r),
            Shifted {
                address: 8 - row,
                data: 32 + 4 * row,
                order: BitOrder::LsbFirst,
            }
        );
    }
}

#[test]
fn four_by_four_full_table() {
    let transactions = shown::<4, 4>();

    // (segment, row) -> (address, data, order), data is the raster index
    let table = [
        (0, 0, (1, 3, BitOrder::MsbFirst)),
        (0, 7, (8, 31, BitOrder::MsbFirst)),
        (2, 5, (6, 21, BitOrder::MsbFirst)),
        (7, 0, (8, 35, BitOrder::LsbFirst)),
        (7, 7, (1, 63, BitOrder::LsbFirst)),
        (9, 2, (3, 74, BitOrder::MsbFirst)),
        (12, 1, (7, 100, BitOrder::LsbFirst)),
        (15, 6, (2, 123, BitOrder::LsbFirst)),
    ];
    for (segment, row, (address, data, order)) in table {
        assert_eq!(
            pair_for(&transactions, segment, row),
            Shifted { address, data, order },
            "segment {segment} row {row}"
        );
    }

    // every pair against the wiring rule
    for (row, pairs) in transactions.iter().enumerate() {
        assert_eq!(pairs.len(), 16);
        for (i, pair) in pairs.iter().enumerate() {
            let segment = 15 - i;
            let band = segment / 4;
            let column = segment % 4;
            let (address, read_column, order) = if band % 2 == 1 {
                (8 - row, column, BitOrder::LsbFirst)
            } else {
                (1 + row, 3 - column, BitOrder::MsbFirst)
            };
            let data = (band * 8 + row) * 4 + read_column;
            assert_eq!(usize::from(pair.address), address);
            assert_eq!(usize::from(pair.data), data);
            assert_eq!(pair.order, order);
        }
    }
}

#[test]
fn wiring_matches_what_is_shown() {
    let transactions = shown::<4, 4>();
    for row in 0..8 {
        for segment in 0..16 {
            let wiring = PanelPosition::from_segment(segment, 4).wiring(row, 4);
            let pair = pair_for(&transactions, segment, row);
            assert_eq!(pair.address, wiring.address);
            assert_eq!(pair.order, wiring.order);
        }
    }
}

#[test]
fn odd_bands_alternate_for_any_width() {
    let transactions = shown::<3, 2>();
    for row in 0..8 {
        let pairs = &transactions[row];
        assert_eq!(pairs.len(), 6);
        // segments 5, 4, 3 are band 1, then 2, 1, 0 are band 0
        for pair in &pairs[..3] {
            assert_eq!(pair.order, BitOrder::LsbFirst);
            assert_eq!(usize::from(pair.address), 8 - row);
        }
        for pair in &pairs[3..] {
            assert_eq!(pair.order, BitOrder::MsbFirst);
            assert_eq!(usize::from(pair.address), 1 + row);
        }
        // segment 0 reads the mirrored column 2 of pixel row `row`
        assert_eq!(usize::from(pairs[5].data), row * 3 + 2);
        // segment 5 reads column 2 of pixel row 8 + `row`
        assert_eq!(usize::from(pairs[0].data), (8 + row) * 3 + 2);
    }
}
