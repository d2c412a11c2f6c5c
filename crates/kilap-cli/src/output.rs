//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use kilap_core::admin::model::BookingDetail;
use kilap_core::dashboard::model::DashboardSummary;
use kilap_core::savings::ResourceSavings;
use kilap_core::service::model::Service;
use kilap_core::testimonial::model::Testimonial;
use kilap_core::{Booking, OrderStatus, StatusEntry, TrackingInfo};

fn status_colored(status: OrderStatus) -> ColoredString {
    match status {
        OrderStatus::Received => status.as_str().normal(),
        OrderStatus::Washing => status.as_str().yellow(),
        OrderStatus::ReadyForDelivery => status.as_str().cyan(),
        OrderStatus::Completed => status.as_str().green(),
    }
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress) / 5;
    format!(
        "{}{} {}%",
        "█".repeat(filled).green(),
        "░".repeat(20 - filled).dimmed(),
        progress
    )
}

fn print_timeline(statuses: &[StatusEntry]) {
    for entry in statuses {
        println!(
            "  {} {}  {}",
            "•".cyan(),
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            status_colored(entry.status)
        );
    }
}

/// Print the customer-facing tracking view.
pub fn print_tracking(info: &TrackingInfo) {
    let booking = &info.booking;
    println!(
        "{} {}",
        booking.order_number.cyan().bold(),
        format!("({})", booking.name).dimmed()
    );
    println!();
    println!("{}: {}", "Status".bold(), status_colored(booking.status));
    println!("{}: {}", "Pickup".bold(), booking.date);
    println!("{}: {}", "Address".bold(), booking.address);
    println!("{}: {}", "Progress".bold(), progress_bar(info.progress));
    println!();
    println!("{}", "History".bold());
    print_timeline(&info.statuses);
}

/// Print bookings as a table.
pub fn print_bookings_table(bookings: &[Booking]) {
    if bookings.is_empty() {
        println!("{}", "No bookings found.".dimmed());
        return;
    }

    println!(
        "{:<10} {:<20} {:<15} {:<12} {:<18}",
        "Order", "Name", "Phone", "Pickup", "Status"
    );
    println!("{}", "─".repeat(78));

    for booking in bookings {
        println!(
            "{:<10} {:<20} {:<15} {:<12} {}",
            booking.order_number,
            truncate(&booking.name, 18),
            booking.phone,
            truncate(&booking.date, 12),
            status_colored(booking.status)
        );
    }
}

/// Print one booking for the back-office.
pub fn print_booking_detail(detail: &BookingDetail) {
    let booking = &detail.booking;
    println!(
        "{} {}",
        booking.order_number.cyan().bold(),
        format!("({})", booking.id).dimmed()
    );
    println!();
    println!("{}: {}", "Customer".bold(), booking.name);
    println!("{}: {}", "Phone".bold(), booking.phone);
    println!("{}: {}", "Address".bold(), booking.address);
    println!("{}: {}", "Pickup".bold(), booking.date);
    match &detail.service {
        Some(service) => println!("{}: {} (Rp {})", "Service".bold(), service.name, service.price),
        None => println!("{}: {}", "Service".bold(), "unknown".dimmed()),
    }
    println!("{}: {}", "Status".bold(), status_colored(booking.status));
    println!("{}: {}", "Progress".bold(), progress_bar(detail.progress));
    println!("{}: {}", "WhatsApp".bold(), detail.whatsapp_link.dimmed());
    println!();
    println!("{}", "History (newest first)".bold());
    print_timeline(&detail.statuses);
}

/// Print services as a table.
pub fn print_services_table(services: &[Service]) {
    if services.is_empty() {
        println!("{}", "No services found.".dimmed());
        return;
    }

    println!("{:<10} {:<26} {:>10} {:<10}", "ID", "Name", "Price", "Turnaround");
    println!("{}", "─".repeat(60));

    for service in services {
        println!(
            "{:<10} {:<26} {:>10} {:<10}",
            truncate(&service.id, 8),
            truncate(&service.name, 24),
            service.price,
            service.turnaround().unwrap_or("-")
        );
    }
}

/// Print testimonials with star ratings.
pub fn print_testimonials(testimonials: &[Testimonial]) {
    if testimonials.is_empty() {
        println!("{}", "No testimonials yet.".dimmed());
        return;
    }

    for t in testimonials {
        let (full, half) = t.stars();
        let stars = format!("{}{}", "★".repeat(usize::from(full)), if half { "½" } else { "" });
        println!("{} {}", t.name.bold(), stars.yellow());
        println!("  {}", t.text);
        println!();
    }
}

/// Print the dashboard summary.
pub fn print_dashboard(summary: &DashboardSummary) {
    println!("{}", "Dashboard".cyan().bold());
    println!();
    println!("  {:<12} {}", "Bookings", summary.total_bookings);
    println!("  {:<12} {}", "Active", summary.active_bookings.to_string().yellow());
    println!("  {:<12} {}", "Completed", summary.completed_bookings.to_string().green());
    println!("  {:<12} {}", "Services", summary.total_services);
    println!();
    println!("{}", "Recent bookings".bold());
    print_bookings_table(&summary.recent);
}

/// Print a savings estimate.
pub fn print_savings(service: &str, pairs: u32, savings: &ResourceSavings) {
    println!(
        "{} {} × {}",
        "Savings".cyan().bold(),
        service,
        pairs
    );
    println!();
    println!("  {:<10} {:.1} L", "Water", savings.water_liters);
    println!("  {:<10} {:.2} kWh", "Energy", savings.energy_kwh);
    println!("  {:<10} {:.2} kg", "Plastic", savings.plastic_kg);
    println!("  {:<10} {:.3}", "Trees", savings.trees);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Budi", 8), "Budi");
        assert_eq!(truncate("Repaint & Restoration", 10), "Repaint...");
        assert_eq!(truncate("Cuci Sépatu Ekspres", 12), "Cuci Sépa...");
    }
}
