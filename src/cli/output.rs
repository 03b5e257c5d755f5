use std::io::Write;

use colored::Colorize;
use ledgerlens_core::{AccountStats, DashboardStats, TransactionSeries};
use rust_decimal::Decimal;
use serde::Serialize;

use super::OutputFormat;
use crate::errors::AppResult;

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn signed_money(value: Decimal) -> String {
    let text = money(value);
    if value < Decimal::ZERO {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

pub fn render_dashboard<W: Write>(
    out: &mut W,
    format: OutputFormat,
    stats: &DashboardStats,
) -> AppResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, stats);
    }
    writeln!(out, "{}", "Dashboard".bold())?;
    writeln!(out, "  Total balance:        {}", money(stats.total_balance))?;
    writeln!(out, "  Balance change:       {}", signed_money(stats.balance_change))?;
    writeln!(out, "  Active accounts:      {}", stats.active_accounts)?;
    writeln!(out, "  New accounts:         {}", stats.new_accounts)?;
    writeln!(out, "  Recent transactions:  {}", stats.recent_transactions)?;
    writeln!(out, "  Pending transactions: {}", stats.pending_transactions)?;
    Ok(())
}

pub fn render_accounts<W: Write>(
    out: &mut W,
    format: OutputFormat,
    stats: &[AccountStats],
) -> AppResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, stats);
    }
    if stats.is_empty() {
        writeln!(out, "No accounts in range.")?;
        return Ok(());
    }
    writeln!(out, "{}", format!("{:<10} {:>6} {:>16}", "Category", "Count", "Balance").bold())?;
    for row in stats {
        writeln!(
            out,
            "{:<10} {:>6} {:>16}",
            row.category.label(),
            row.count,
            money(row.total_balance)
        )?;
    }
    Ok(())
}

pub fn render_series<W: Write>(
    out: &mut W,
    format: OutputFormat,
    series: &TransactionSeries,
) -> AppResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, series);
    }
    if series.is_empty() {
        writeln!(out, "No operations in range.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{}",
        format!(
            "{:<12} {:>14} {:>14} {:>14}",
            "Bucket", "Deposits", "Withdrawals", "Net"
        )
        .bold()
    )?;
    for (date, deposits, withdrawals, net) in series.rows() {
        writeln!(
            out,
            "{:<12} {:>14} {:>14} {:>14}",
            date,
            money(deposits),
            money(withdrawals),
            signed_money(net)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_domain::AccountCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn json_accounts_use_category_labels() {
        let stats = vec![AccountStats {
            category: AccountCategory::Savings,
            count: 3,
            total_balance: dec!(12.5),
        }];
        let mut buffer = Vec::new();
        render_accounts(&mut buffer, OutputFormat::Json, &stats).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["category"], "Savings");
        assert_eq!(value[0]["count"], 3);
        assert_eq!(value[0]["totalBalance"], "12.5");
    }

    #[test]
    fn table_series_reports_empty_result() {
        let mut buffer = Vec::new();
        render_series(&mut buffer, OutputFormat::Table, &TransactionSeries::default()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "No operations in range.\n");
    }

    #[test]
    fn money_uses_two_decimals() {
        assert_eq!(money(dec!(3)), "3.00");
        assert_eq!(money(dec!(-1.5)), "-1.50");
    }
}
