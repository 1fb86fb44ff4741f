/// Deploy-time site configuration. Built once in `main` and never mutated;
/// fill the relay and challenge identifiers before go-live.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Address every submission is delivered to, over the relay or mailto.
    pub contact_email: &'static str,
    pub emailjs_public_key: &'static str,
    pub emailjs_service_id: &'static str,
    pub template_contact: &'static str,
    pub template_worker: &'static str,
    /// Empty until the challenge widget is set up for the domain.
    pub recaptcha_site_key: &'static str,
}

impl SiteConfig {
    #[cfg(debug_assertions)]
    pub fn load() -> Self {
        // Local builds keep the relay unconfigured so dev submits take the
        // mailto path instead of sending real mail.
        Self {
            contact_email: "contact.earnuwant@gmail.com",
            emailjs_public_key: "",
            emailjs_service_id: "",
            template_contact: "",
            template_worker: "",
            recaptcha_site_key: "",
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn load() -> Self {
        Self {
            contact_email: "contact.earnuwant@gmail.com",
            emailjs_public_key: "dI1ShLp6VUVpPo5Io",
            emailjs_service_id: "service_bvq0snh",
            template_contact: "template_contact",
            template_worker: "template_worker",
            recaptcha_site_key: "",
        }
    }

    pub fn relay_configured(&self) -> bool {
        !self.emailjs_service_id.is_empty()
    }
}
