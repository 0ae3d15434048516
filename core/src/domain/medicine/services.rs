use crate::domain::medicine::entities::{MedicineRecord, ScannedMedicine};

/// Whether the scanned medicine appears on the prescription.
///
/// An entry matches when its name, lowercased, contains the scanned name,
/// lowercased. "Dolo" matches "Dolo-650 Paracetamol". Dosage is not compared.
/// An empty prescription never matches; callers report the missing
/// prescription before getting here.
pub fn is_on_prescription(scanned: &ScannedMedicine, prescription: &[MedicineRecord]) -> bool {
    let needle = scanned.name.to_lowercase();
    prescription
        .iter()
        .any(|entry| name_contains(entry, &needle))
}

/// Prescription entries accepted by [`is_on_prescription`], in prescription
/// order.
pub fn matching_entries<'a>(
    scanned: &ScannedMedicine,
    prescription: &'a [MedicineRecord],
) -> Vec<&'a MedicineRecord> {
    let needle = scanned.name.to_lowercase();
    prescription
        .iter()
        .filter(|entry| name_contains(entry, &needle))
        .collect()
}

fn name_contains(entry: &MedicineRecord, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
}
