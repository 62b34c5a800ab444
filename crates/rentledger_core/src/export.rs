//! CSV export of payment records
//!
//! Emits the back-office export column set, one row per payment, in the order
//! the records are supplied (callers pass newest-first, matching the storage
//! layer's ordering).

use std::io;

use serde::Serialize;

use crate::model::Payment;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: u32,
    unit_id: u32,
    payer_type: &'a str,
    amount: rust_decimal::Decimal,
    date: String,
    company_commission: rust_decimal::Decimal,
    vat_on_commission: rust_decimal::Decimal,
    net_to_owner: rust_decimal::Decimal,
    description: &'a str,
}

/// Write payments as CSV with a header row. Timestamps use
/// `YYYY-MM-DD HH:MM:SS`.
pub fn write_payments_csv<'a, W, I>(payments: I, writer: W) -> csv::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Payment>,
{
    // Header is written explicitly so empty exports still carry it
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record([
        "id",
        "unit_id",
        "payer_type",
        "amount",
        "date",
        "company_commission",
        "vat_on_commission",
        "net_to_owner",
        "description",
    ])?;
    for payment in payments {
        csv_writer.serialize(CsvRow {
            id: payment.id.0,
            unit_id: payment.unit_id.0,
            payer_type: match payment.payer_type {
                crate::model::PayerType::Owner => "owner",
                crate::model::PayerType::Tenant => "tenant",
            },
            amount: payment.amount,
            date: payment.date.strftime("%Y-%m-%d %H:%M:%S").to_string(),
            company_commission: payment.company_commission,
            vat_on_commission: payment.vat_on_commission,
            net_to_owner: payment.net_to_owner,
            description: payment.description.as_deref().unwrap_or(""),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PayerId, PayerType, Payment, PaymentId, UnitId};
    use jiff::civil::datetime;
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_columns_and_rows() {
        let payment = Payment::new(
            PaymentId(7),
            UnitId(3),
            PayerType::Tenant,
            PayerId(1),
            dec!(1000),
            datetime(2024, 1, 15, 9, 30, 0, 0),
            Some("January rent".into()),
            dec!(0.05),
            dec!(0.15),
        );

        let mut buffer = Vec::new();
        write_payments_csv([&payment], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "id,unit_id,payer_type,amount,date,company_commission,vat_on_commission,net_to_owner,description"
        );
        assert_eq!(
            lines.next().unwrap(),
            "7,3,tenant,1000,2024-01-15 09:30:00,50.00,7.50,942.50,January rent"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_empty_input_has_header_only() {
        let mut buffer = Vec::new();
        write_payments_csv(std::iter::empty::<&Payment>(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text.trim_end(),
            "id,unit_id,payer_type,amount,date,company_commission,vat_on_commission,net_to_owner,description"
        );
    }
}
