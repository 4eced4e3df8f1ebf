// Services offered by the team, with the static sample catalog

use super::DataError;

#[derive(Clone, Debug)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub price: Option<u32>,
    pub duration: Option<&'static str>,
}

impl Service {
    pub fn formatted_price(&self) -> String {
        match self.price {
            Some(price) => format!("${}", group_thousands(price)),
            None => "Consultar precio".to_string(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && !self.description.is_empty()
            && !self.icon.is_empty()
            && !self.features.is_empty()
    }
}

/// es-ES style thousands grouping: 2500 -> "2.500"
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn sample_services() -> Result<Vec<Service>, DataError> {
    let services = vec![
        Service {
            id: 1,
            title: "Desarrollo Web Frontend",
            description: "Creamos interfaces de usuario modernas, responsivas y altamente \
                interactivas utilizando las últimas tecnologías frontend. Nos especializamos en \
                crear experiencias de usuario excepcionales que conviertan visitantes en clientes.",
            icon: "🎨",
            features: &[
                "Diseño responsive para todos los dispositivos",
                "Interfaces de usuario intuitivas y atractivas",
                "Optimización de rendimiento y velocidad de carga",
                "Integración con APIs y servicios backend",
                "Testing automatizado de componentes",
                "Accesibilidad web (WCAG 2.1)",
                "SEO técnico optimizado",
            ],
            technologies: &["React", "Vue.js", "Angular", "TypeScript", "Sass/SCSS", "Webpack"],
            price: Some(2500),
            duration: Some("4-8 semanas"),
        },
        Service {
            id: 2,
            title: "Desarrollo Web Backend",
            description: "Desarrollamos APIs robustas, escalables y seguras que forman la columna \
                vertebral de tus aplicaciones. Implementamos arquitecturas modernas con las \
                mejores prácticas de seguridad y rendimiento.",
            icon: "⚙️",
            features: &[
                "APIs RESTful y GraphQL",
                "Arquitecturas escalables y mantenibles",
                "Bases de datos relacionales y NoSQL",
                "Autenticación y autorización segura",
                "Integración con servicios de terceros",
                "Documentación técnica completa",
                "Monitoreo y logging avanzado",
            ],
            technologies: &["Node.js", "Python", "Django", "FastAPI", "PostgreSQL", "MongoDB", "Redis"],
            price: Some(3000),
            duration: Some("6-10 semanas"),
        },
        Service {
            id: 3,
            title: "Aplicaciones Móviles",
            description: "Desarrollamos aplicaciones móviles nativas y multiplataforma que \
                ofrecen experiencias de usuario excepcionales en iOS y Android. Desde la \
                concepción hasta la publicación en las tiendas de aplicaciones.",
            icon: "📱",
            features: &[
                "Desarrollo nativo para iOS y Android",
                "Aplicaciones multiplataforma con React Native",
                "Diseño UX/UI optimizado para móviles",
                "Integración con APIs y servicios cloud",
                "Notificaciones push personalizadas",
                "Publicación en App Store y Google Play",
                "Mantenimiento y actualizaciones",
            ],
            technologies: &["React Native", "Flutter", "Swift", "Kotlin", "Firebase", "AWS Mobile"],
            price: Some(4000),
            duration: Some("8-12 semanas"),
        },
        Service {
            id: 4,
            title: "DevOps y Cloud",
            description: "Implementamos soluciones de infraestructura cloud, automatización de \
                despliegues y pipelines de CI/CD para optimizar el ciclo de vida de desarrollo y \
                garantizar alta disponibilidad.",
            icon: "☁️",
            features: &[
                "Configuración de infraestructura cloud",
                "Pipelines de CI/CD automatizados",
                "Containerización con Docker y Kubernetes",
                "Monitoreo y alertas en tiempo real",
                "Backup y recuperación de datos",
                "Escalado automático de aplicaciones",
                "Optimización de costos cloud",
            ],
            technologies: &["AWS", "Docker", "Kubernetes", "Jenkins", "Terraform", "Prometheus", "Grafana"],
            price: Some(3500),
            duration: Some("3-6 semanas"),
        },
        Service {
            id: 5,
            title: "Consultoría Técnica",
            description: "Ofrecemos asesoramiento experto en arquitectura de software, selección \
                de tecnologías, auditorías de código y estrategias de modernización de \
                aplicaciones legacy.",
            icon: "🧠",
            features: &[
                "Auditoría de arquitectura y código",
                "Estrategias de migración y modernización",
                "Selección de stack tecnológico",
                "Revisión de mejores prácticas",
                "Formación técnica del equipo",
                "Documentación de procesos",
                "Roadmap tecnológico personalizado",
            ],
            technologies: &["Análisis", "Documentación", "Capacitación", "Metodologías Ágiles"],
            price: Some(1500),
            duration: Some("2-4 semanas"),
        },
        Service {
            id: 6,
            title: "Mantenimiento y Soporte",
            description: "Proporcionamos servicios continuos de mantenimiento, actualizaciones \
                de seguridad, optimización de rendimiento y soporte técnico para mantener tus \
                aplicaciones funcionando perfectamente.",
            icon: "🔧",
            features: &[
                "Mantenimiento preventivo y correctivo",
                "Actualizaciones de seguridad",
                "Optimización de rendimiento",
                "Soporte técnico 24/7",
                "Backup y recuperación",
                "Monitoreo continuo",
                "Reportes mensuales de estado",
            ],
            technologies: &["Todas las tecnologías", "Monitoreo", "Backup", "Seguridad"],
            price: Some(800),
            duration: Some("Mensual"),
        },
    ];

    for service in &services {
        if !service.is_valid() {
            return Err(DataError::InvalidService(service.id));
        }
    }
    Ok(services)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(group_thousands(800), "800");
        assert_eq!(group_thousands(2500), "2.500");
        assert_eq!(group_thousands(1250000), "1.250.000");
    }

    #[test]
    fn missing_price_falls_back() {
        let mut services = sample_services().unwrap();
        services[0].price = None;
        assert_eq!(services[0].formatted_price(), "Consultar precio");
        assert_eq!(services[1].formatted_price(), "$3.000");
    }
}
