#![no_main]

use codec::{CityFile, CodecOptions, FILE_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut city) = CityFile::read_from(data) else {
        assert!(data.len() < FILE_SIZE);
        return;
    };
    assert!(data.len() >= FILE_SIZE);
    assert!((0..=20).contains(&city.header.city_tax));
    assert!((0..=3).contains(&city.header.sim_speed));
    assert!(city.header.city_time >= 0);

    let _ = city.copy_arrays();

    // A symmetric save of a loaded city must reproduce every section except
    // the header fields it rewrites.
    let mut out = Vec::with_capacity(FILE_SIZE);
    city.write_to(&mut out, &CodecOptions::symmetric().with_funding_preserved())
        .expect("write to vec");
    assert_eq!(out.len(), FILE_SIZE);
    let misc_start = wire::SectionTag::MiscHistory.byte_offset();
    assert_eq!(&out[..misc_start], &data[..misc_start]);
    let tiles_start = wire::SectionTag::TileMap.byte_offset();
    assert_eq!(&out[tiles_start..], &data[tiles_start..FILE_SIZE]);
});
