// portal/src/render.rs

// One maud template per record type. Every interpolated value goes through
// maud's escaping; record nodes carry `data-kind="record"`, placeholders
// `data-kind="empty"` and failures `data-kind="error"`.

use chrono::{DateTime, NaiveDateTime};
use maud::{html, Markup};
use models::{
    is_terminal_status, Doctor, DoctorAppointment, Order, OrderFlag, PatientAppointment,
    Prescription,
};

use crate::page::StatusMessage;

/// Element used for the single placeholder/error node of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    ListItem,
    Paragraph,
    SmallParagraph,
}

const LABEL: &str = "block font-medium text-gray-800";

pub fn status_class(status: &str) -> &'static str {
    if is_terminal_status(status) { "text-green-600" } else { "text-yellow-600" }
}

/// Formats an API timestamp the way a browser's `toLocaleString` would in
/// en-US. Unparseable values are shown as received.
pub fn display_time(raw: &str) -> String {
    parse_api_time(raw)
        .map(|t| t.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_api_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|t| t.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
}

pub fn empty_state(slot: Slot, text: &str) -> Markup {
    match slot {
        Slot::ListItem => html! { li class="text-gray-500" data-kind="empty" { (text) } },
        Slot::Paragraph => html! { p class="text-gray-500" data-kind="empty" { (text) } },
        Slot::SmallParagraph => html! { p class="text-gray-500 text-sm" data-kind="empty" { (text) } },
    }
}

pub fn error_line(slot: Slot, prefix: &str, reason: &str) -> Markup {
    match slot {
        Slot::ListItem => html! { li class="text-red-600" data-kind="error" { (prefix) (reason) } },
        _ => html! { p class="text-red-600" data-kind="error" { (prefix) (reason) } },
    }
}

pub fn status_message(message: &StatusMessage) -> Markup {
    html! { p class=(message.tone.class()) data-kind="message" { (message.text) } }
}

pub fn patient_appointment(appt: &PatientAppointment) -> Markup {
    html! {
        li class="p-4 border-b last:border-b-0" data-kind="record" data-id=(appt.appointment_id) {
            span class=(LABEL) { "Date:" } " " (display_time(&appt.appointment_time)) br;
            span class=(LABEL) { "Doctor:" }
            " Dr. " (appt.doctor_first_name) " " (appt.doctor_last_name) " (" (appt.specialization) ")" br;
            span class=(LABEL) { "Status:" } " "
            span class={ "font-semibold " (status_class(&appt.status)) } { (appt.status) }
        }
    }
}

pub fn prescription(pres: &Prescription) -> Markup {
    let (class, label) = match pres.is_ordered {
        OrderFlag::Yes => ("text-green-600", "Ordered"),
        OrderFlag::No => ("text-red-600", "Not Ordered"),
    };
    html! {
        li class="p-4 border-b last:border-b-0" data-kind="record" data-id=(pres.prescription_id) {
            span class=(LABEL) { "Medication:" } " " (pres.medication_name) " (" (pres.dosage) ")" br;
            span class=(LABEL) { "Prescribed by:" }
            " Dr. " (pres.doctor_first_name) " " (pres.doctor_last_name) br;
            span class=(LABEL) { "Status:" } " "
            span class={ "font-semibold " (class) } { (label) }
        }
    }
}

/// Checkbox offered in the pharmacy order form.
pub fn order_candidate(pres: &Prescription) -> Markup {
    let input_id = format!("pres-{}", pres.prescription_id);
    html! {
        div class="flex items-center space-x-2 p-2 rounded-md hover:bg-gray-100" data-kind="record" data-id=(pres.prescription_id) {
            input type="checkbox" name="prescription_ids" value=(pres.prescription_id) id=(input_id)
                class="h-4 w-4 text-blue-600 border-gray-300 rounded focus:ring-blue-500";
            label for=(input_id) class="text-sm text-gray-700" {
                (pres.medication_name) " (" (pres.dosage) ")"
            }
        }
    }
}

pub fn order(order: &Order) -> Markup {
    html! {
        li class="p-4 border-b last:border-b-0" data-kind="record" data-id=(order.order_id) {
            span class=(LABEL) { "Order ID:" } " " (order.order_id)
            span class="block text-sm text-gray-500" { (display_time(&order.order_date)) }
            span class=(LABEL) { "Status:" } " "
            span class="font-semibold text-blue-600" { (order.status) }
            span class={ (LABEL) " mt-2" } { "Items:" }
            ul class="list-disc list-inside" {
                @for item in &order.items {
                    li class="text-sm text-gray-600 ml-4" { (item) }
                }
            }
        }
    }
}

/// Search result card with its own booking form.
pub fn doctor_card(doc: &Doctor) -> Markup {
    html! {
        div class="bg-white p-6 rounded-lg shadow-lg" data-kind="record" data-id=(doc.doctor_id) {
            h3 class="text-xl font-semibold text-gray-800" { "Dr. " (doc.first_name) " " (doc.last_name) }
            p class="text-indigo-600 font-medium" { (doc.specialization) }
            form class="booking-form mt-4 border-t pt-4 space-y-2" {
                div {
                    label class="block text-sm font-medium text-gray-700 mb-1" { "Select date and time:" }
                    input type="datetime-local" class="appt-time w-full px-3 py-2 border rounded-md" required;
                }
                input type="hidden" class="doctor-id" value=(doc.doctor_id);
                button type="submit" class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition duration-300" {
                    "Book Now"
                }
            }
        }
    }
}

/// Clickable entry of the doctor's appointment list.
pub fn doctor_appointment(appt: &DoctorAppointment) -> Markup {
    html! {
        li class="p-4 rounded-md border cursor-pointer hover:bg-gray-100 transition duration-200"
            data-kind="record" data-id=(appt.appointment_id) {
            strong class="block text-gray-800" { (display_time(&appt.appointment_time)) }
            span class="text-sm text-gray-600" { "Patient: " (appt.patient_name()) } br;
            span class={ "text-sm font-semibold " (status_class(&appt.status)) } { (appt.status) }
        }
    }
}

/// Concatenates record nodes into one fragment.
pub fn records<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>, item: fn(&T) -> Markup) -> Markup {
    html! {
        @for record in items {
            (item(record))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(status: &str) -> PatientAppointment {
        PatientAppointment {
            appointment_id: 1,
            appointment_time: "Wed, 01 May 2024 09:30:00 GMT".into(),
            doctor_first_name: "Gregory".into(),
            doctor_last_name: "House".into(),
            specialization: "Diagnostics".into(),
            status: status.into(),
            visit_notes: None,
        }
    }

    #[test]
    fn should_format_timestamps_like_a_browser() {
        assert_eq!(display_time("Wed, 01 May 2024 09:30:00 GMT"), "5/1/2024, 9:30:00 AM");
        assert_eq!(display_time("2024-05-01 14:05:00"), "5/1/2024, 2:05:00 PM");
        assert_eq!(display_time("2024-05-01T14:05:00+00:00"), "5/1/2024, 2:05:00 PM");
        assert_eq!(display_time("soon"), "soon");
    }

    #[test]
    fn should_branch_status_styling_two_ways() {
        assert!(patient_appointment(&appt("Completed")).into_string().contains("text-green-600"));
        assert!(patient_appointment(&appt("Scheduled")).into_string().contains("text-yellow-600"));
        assert!(patient_appointment(&appt("Cancelled")).into_string().contains("text-yellow-600"));
    }

    #[test]
    fn should_escape_interpolated_text() {
        let mut a = appt("Scheduled");
        a.doctor_first_name = "<script>alert(1)</script>".into();
        let html = patient_appointment(&a).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn should_render_checkbox_for_candidate() {
        let pres = Prescription {
            prescription_id: 5,
            medication_name: "Amoxicillin".into(),
            dosage: "500mg".into(),
            instructions: None,
            is_ordered: OrderFlag::No,
            appointment_time: None,
            doctor_first_name: "Greg".into(),
            doctor_last_name: "House".into(),
        };
        let html = order_candidate(&pres).into_string();
        assert!(html.contains(r#"name="prescription_ids""#));
        assert!(html.contains(r#"value="5""#));
        assert!(html.contains(r#"id="pres-5""#));
        assert!(prescription(&pres).into_string().contains("Not Ordered"));
    }

    #[test]
    fn should_list_order_items() {
        let o = Order {
            order_id: 12,
            order_date: "2024-05-02 10:00:00".into(),
            status: "Pending".into(),
            items: vec!["Amoxicillin (500mg)".into(), "Ibuprofen (200mg)".into()],
        };
        let html = order(&o).into_string();
        assert_eq!(html.matches("ml-4").count(), 2);
        assert!(html.contains("Pending"));
    }

    #[test]
    fn should_mark_placeholder_and_error_nodes() {
        let empty = empty_state(Slot::ListItem, "You have no appointments.").into_string();
        assert_eq!(empty, r#"<li class="text-gray-500" data-kind="empty">You have no appointments.</li>"#);
        let err = error_line(Slot::Paragraph, "Error: ", "Failed to fetch doctors").into_string();
        assert!(err.starts_with("<p"));
        assert!(err.contains("Error: Failed to fetch doctors"));
    }
}
