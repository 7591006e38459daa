use sm_core::Tolerances;
use sm_decay::DecayGenerator;
use sm_particle::KindTag;
use sm_sim::{decay_roster, reference_roster};

fn records_for(seed: u64) -> Vec<sm_sim::DecayRecord> {
    let generator = DecayGenerator::default();
    let mut roster = reference_roster(&Tolerances::default()).unwrap();
    decay_roster(&mut roster, &generator, seed).unwrap()
}

#[test]
fn only_unstable_members_decay() {
    let records = records_for(3);
    let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
    assert_eq!(indices, [4, 5, 6, 7, 8, 9]);
    assert_eq!(records[0].channel.parent_kind(), KindTag::Tau);
    assert_eq!(records[1].charge, 1.0);
}

#[test]
fn every_record_conserves_charge() {
    for seed in 0..16 {
        for record in records_for(seed) {
            let total: f64 = record.products.iter().map(|p| p.charge).sum();
            assert!(
                (total - record.charge).abs() <= 0.01,
                "{} via {:?}",
                record.parent,
                record.channel
            );
            assert!(record.balance.charge.abs() <= 0.01);
        }
    }
}

#[test]
fn reports_are_reproducible_per_seed() {
    assert_eq!(records_for(2024), records_for(2024));
    let json = serde_json::to_string(&records_for(2024)).unwrap();
    assert_eq!(json, serde_json::to_string(&records_for(2024)).unwrap());
}

#[test]
fn w_bosons_branch_on_charge() {
    let records = records_for(5);
    let w_plus = &records[3];
    let w_minus = &records[4];
    assert!(w_plus.channel.label().starts_with("W+"));
    assert!(w_minus.channel.label().starts_with("W-"));
}
