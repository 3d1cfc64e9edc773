use crate::config::PaymentRules;
use crate::models::{Activity, AppData, MemberShare, MonthlyStats, ReferralDistribution};
use crate::projection::same_month;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const UNASSIGNED: &str = "Unassigned";

pub fn build_stats_at(today: NaiveDate, data: &AppData, rules: PaymentRules) -> MonthlyStats {
    let monthly: Vec<&Activity> = monthly_activities(&data.activities, today).collect();

    let total_sals = monthly.len() as u64;
    let total_appointments = monthly
        .iter()
        .filter(|activity| activity.appointment_booked)
        .count() as u64;
    let referral_revenue = total_sals.saturating_mul(rules.base_sal_payment);
    let appointment_revenue = total_appointments.saturating_mul(rules.appointment_bonus);
    let monthly_earnings = referral_revenue.saturating_add(appointment_revenue);

    let average_revenue_per_activity = if total_sals == 0 {
        0.0
    } else {
        monthly_earnings as f64 / total_sals as f64
    };

    MonthlyStats {
        month: month_label(today),
        total_sals,
        total_appointments,
        referral_revenue,
        appointment_revenue,
        monthly_earnings,
        average_revenue_per_activity,
    }
}

pub fn build_referrals_at(
    today: NaiveDate,
    data: &AppData,
    rules: PaymentRules,
) -> ReferralDistribution {
    let mut by_member: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    let mut total_referrals = 0u64;

    for activity in monthly_activities(&data.activities, today) {
        let name = match activity.connected_with.trim() {
            "" => UNASSIGNED.to_string(),
            name => name.to_string(),
        };
        let entry = by_member.entry(name).or_default();
        entry.0 += 1;
        if activity.appointment_booked {
            entry.1 += 1;
        }
        total_referrals += 1;
    }

    let mut members: Vec<MemberShare> = by_member
        .into_iter()
        .map(|(name, (referrals, appointments))| MemberShare {
            name,
            referrals,
            appointments,
            percent: round_one(referrals as f64 / total_referrals as f64 * 100.0),
        })
        .collect();
    // BTreeMap already yields names in order; the stable sort keeps it for ties.
    members.sort_by(|a, b| b.referrals.cmp(&a.referrals));

    ReferralDistribution {
        month: month_label(today),
        total_referrals,
        total_revenue: total_referrals.saturating_mul(rules.base_sal_payment),
        members,
    }
}

fn monthly_activities(
    activities: &[Activity],
    today: NaiveDate,
) -> impl Iterator<Item = &Activity> {
    activities
        .iter()
        .filter(move |activity| same_month(activity.date, today))
}

fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
