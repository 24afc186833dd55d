// SPDX-License-Identifier: Apache-2.0

use crate::dto::{AdminUserDto, ContactDto, CourseDto, PaymentDto, ServiceDto, StudentDto};
use elimu_model::{AdminUser, Contact, Course, Payment, Service, Student};

#[must_use]
pub fn admin_user_to_dto(user: &AdminUser) -> AdminUserDto {
    AdminUserDto {
        id: user.id,
        username: user.username.clone(),
    }
}

#[must_use]
pub fn student_to_dto(student: &Student) -> StudentDto {
    StudentDto {
        id: student.id,
        name: student.name.clone(),
        email: student.email.as_str().to_string(),
        phone: student.phone.clone(),
        course: student.course.clone(),
        admission_status: student.admission.as_str().to_string(),
        created_at: student.created_at_ms,
    }
}

#[must_use]
pub fn contact_to_dto(contact: &Contact) -> ContactDto {
    ContactDto {
        id: contact.id,
        name: contact.name.clone(),
        email: contact.email.as_str().to_string(),
        phone: contact.phone.clone(),
        subject: contact.subject.clone(),
        message: contact.message.clone(),
        replied: contact.replied,
        created_at: contact.created_at_ms,
    }
}

#[must_use]
pub fn course_to_dto(course: &Course) -> CourseDto {
    CourseDto {
        id: course.id,
        title: course.title.clone(),
        kind: course.kind.clone(),
        description: course.description.clone(),
        duration: course.duration.clone(),
        certification: course.certification.clone(),
        prerequisites: course.prerequisites.clone(),
        fee: course.fee.clone(),
    }
}

#[must_use]
pub fn service_to_dto(service: &Service) -> ServiceDto {
    ServiceDto {
        id: service.id,
        title: service.title.clone(),
        description: service.description.clone(),
        audience: service.audience.clone(),
        fee: service.fee.clone(),
    }
}

#[must_use]
pub fn payment_to_dto(payment: &Payment) -> PaymentDto {
    PaymentDto {
        id: payment.id,
        student_name: payment.student_name.clone(),
        course: payment.course.clone(),
        amount: payment.amount_ksh,
        mpesa_code: payment.mpesa_code.clone(),
        payment_date: payment.paid_on.clone(),
        status: payment.status.as_str().to_string(),
        phone_number: payment.phone.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elimu_model::{NewStudent, Student};

    #[test]
    fn student_dto_uses_camel_case_wire_names() {
        let student = Student::from_submission(
            4,
            NewStudent::parse("Jane", "jane@example.com", "0712", "ECDE").expect("valid"),
            1_700_000_000_000,
        );
        let json = serde_json::to_value(student_to_dto(&student)).expect("serialize");
        assert_eq!(json["admissionStatus"], "pending");
        assert_eq!(json["createdAt"], 1_700_000_000_000_u64);
        assert!(json.get("created_at_ms").is_none());
    }
}
