//! Per-type template functions for document rendering.
//!
//! Each template is a pure mapping from a field set to rendered text.
//! Supplied fields are interpolated verbatim; absent or empty fields
//! render as bracketed placeholders. Templates with an optional
//! "additional clauses" section renumber the headings that follow it so
//! clause numbering stays sequential.

use super::date;
use super::fields::{ContractFields, ContractType};

/// Dispatch from contract type to its template function.
pub fn template_for(contract_type: ContractType) -> fn(&ContractFields) -> String {
    match contract_type {
        ContractType::Services => services,
        ContractType::Nda => nda,
        ContractType::Employment => employment,
        ContractType::Partnership => partnership,
        ContractType::Rental => rental,
        ContractType::Sale => sale,
        ContractType::Terms => terms,
        ContractType::Privacy => privacy,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

fn value_or<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    non_empty(field).unwrap_or(placeholder)
}

fn date_or_today(fields: &ContractFields) -> String {
    match non_empty(&fields.date) {
        Some(explicit) => explicit.to_string(),
        None => date::today_es(),
    }
}

fn services(fields: &ContractFields) -> String {
    let (additional, closing) = match non_empty(&fields.additional_clauses) {
        Some(clauses) => (
            format!("DÉCIMA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
            "DÉCIMA PRIMERA",
        ),
        None => (String::new(), "DÉCIMA"),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                    CONTRATO DE PRESTACIÓN DE SERVICIOS
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

De una parte, {party_a}, en adelante "EL PRESTADOR".

De otra parte, {party_b}, en adelante "EL CLIENTE".

Ambas partes se reconocen mutuamente la capacidad legal necesaria para la firma del presente contrato, y

                              EXPONEN

Que EL CLIENTE está interesado en contratar los servicios profesionales de EL PRESTADOR, quien cuenta con la experiencia y conocimientos necesarios para llevar a cabo dichos servicios.

Por lo anterior, ambas partes acuerdan celebrar el presente CONTRATO DE PRESTACIÓN DE SERVICIOS, que se regirá por las siguientes:

                             CLÁUSULAS

PRIMERA.- OBJETO DEL CONTRATO
{description}

SEGUNDA.- DURACIÓN
El presente contrato tendrá una duración de {duration}, comenzando a partir de la fecha de firma del presente documento. Podrá ser prorrogado de mutuo acuerdo entre las partes.

TERCERA.- HONORARIOS Y FORMA DE PAGO
Como contraprestación por los servicios prestados, EL CLIENTE abonará a EL PRESTADOR la cantidad de {amount}.

El pago se realizará de la siguiente forma:
• 50% al inicio del proyecto
• 50% a la entrega final

CUARTA.- OBLIGACIONES DEL PRESTADOR
EL PRESTADOR se compromete a:
a) Ejecutar los servicios objeto de este contrato con la máxima diligencia y profesionalidad.
b) Mantener informado a EL CLIENTE sobre el progreso de los trabajos.
c) Cumplir con los plazos acordados.
d) Guardar estricta confidencialidad sobre toda información relacionada con EL CLIENTE.
e) No subcontratar los servicios sin autorización previa y por escrito de EL CLIENTE.

QUINTA.- OBLIGACIONES DEL CLIENTE
EL CLIENTE se compromete a:
a) Proporcionar toda la información y materiales necesarios para la correcta ejecución de los servicios.
b) Realizar los pagos en los plazos acordados.
c) Comunicar de forma clara y oportuna cualquier cambio en los requisitos.
d) Facilitar el acceso a los recursos necesarios para el desarrollo del trabajo.

SEXTA.- CONFIDENCIALIDAD
Ambas partes se comprometen a mantener estricta confidencialidad sobre toda la información intercambiada durante la vigencia del presente contrato y después de su terminación. Esta obligación se extiende a todos los datos, documentos, métodos, procedimientos y know-how.

SÉPTIMA.- PROPIEDAD INTELECTUAL
Los derechos de propiedad intelectual sobre los trabajos realizados serán cedidos a EL CLIENTE una vez completado el pago total acordado. EL PRESTADOR podrá utilizar los trabajos como referencia en su portfolio, salvo que EL CLIENTE solicite expresamente lo contrario.

OCTAVA.- RESOLUCIÓN
Cualquiera de las partes podrá resolver el presente contrato mediante notificación escrita con un preaviso mínimo de quince (15) días. En caso de resolución anticipada, EL CLIENTE deberá abonar los servicios efectivamente prestados hasta la fecha de resolución.

NOVENA.- MODIFICACIONES
Cualquier modificación del presente contrato deberá realizarse por escrito y ser firmada por ambas partes.

{additional}{closing}.- LEGISLACIÓN APLICABLE Y JURISDICCIÓN
El presente contrato se regirá e interpretará de acuerdo con la legislación española. Para cualquier controversia derivada del mismo, las partes se someten a los Juzgados y Tribunales de {city}, renunciando a cualquier otro fuero que pudiera corresponderles.

Y en prueba de conformidad, firman el presente contrato por duplicado y a un solo efecto.


_____________________________              _____________________________
        EL PRESTADOR                              EL CLIENTE
    {signature_a}                         {signature_b}


DNI/NIF: _________________              DNI/NIF: _________________
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[NOMBRE DEL PRESTADOR]"),
        party_b = value_or(&fields.party_b, "[NOMBRE DEL CLIENTE]"),
        description = value_or(
            &fields.description,
            "EL PRESTADOR se compromete a realizar los servicios profesionales acordados, aplicando sus conocimientos y experiencia para lograr los objetivos establecidos por EL CLIENTE."
        ),
        duration = value_or(&fields.duration, "[DURACIÓN ACORDADA]"),
        amount = value_or(&fields.amount, "[CANTIDAD ACORDADA]"),
        additional = additional,
        closing = closing,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn nda(fields: &ContractFields) -> String {
    let (additional, closing) = match non_empty(&fields.additional_clauses) {
        Some(clauses) => (
            format!("OCTAVA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
            "OCTAVA (CONT.)",
        ),
        None => (String::new(), "OCTAVA"),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
            ACUERDO DE CONFIDENCIALIDAD (NDA)
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

De una parte, {party_a}, en adelante "LA PARTE DIVULGADORA".

De otra parte, {party_b}, en adelante "LA PARTE RECEPTORA".

Ambas partes, conjuntamente denominadas "LAS PARTES", reconociéndose mutuamente capacidad legal suficiente para la firma del presente acuerdo,

                              EXPONEN

I. Que LAS PARTES desean explorar una posible relación comercial o de colaboración que requerirá el intercambio de información confidencial.

II. Que LAS PARTES desean proteger dicha información confidencial y establecer los términos bajo los cuales será compartida.

Por lo anterior, LAS PARTES acuerdan celebrar el presente ACUERDO DE CONFIDENCIALIDAD conforme a las siguientes:

                             CLÁUSULAS

PRIMERA.- DEFINICIÓN DE INFORMACIÓN CONFIDENCIAL
Se considerará "Información Confidencial" toda información, ya sea oral, escrita, gráfica, electrónica o de cualquier otro tipo, que incluye pero no se limita a:
{description}

SEGUNDA.- OBLIGACIONES DE CONFIDENCIALIDAD
LA PARTE RECEPTORA se compromete a:
a) Mantener la Información Confidencial en estricta reserva.
b) No divulgar la Información Confidencial a terceros sin autorización previa y por escrito.
c) Utilizar la Información Confidencial únicamente para los fines acordados.
d) Proteger la Información Confidencial con el mismo grado de cuidado que utiliza para proteger su propia información confidencial.
e) Limitar el acceso a la Información Confidencial a aquellos empleados o colaboradores que necesiten conocerla.

TERCERA.- EXCEPCIONES
No se considerará Información Confidencial aquella que:
a) Sea de dominio público en el momento de su divulgación.
b) Se convierta en información pública sin incumplimiento de este acuerdo.
c) Estuviera en posesión legítima de LA PARTE RECEPTORA antes de su divulgación.
d) Sea desarrollada independientemente por LA PARTE RECEPTORA.
e) Deba ser divulgada por mandato legal o judicial.

CUARTA.- DURACIÓN
Este acuerdo tendrá una duración de {duration} a partir de la fecha de su firma. Las obligaciones de confidencialidad sobrevivirán a la terminación del acuerdo por un período adicional de tres (3) años.

QUINTA.- DEVOLUCIÓN DE INFORMACIÓN
A la terminación de este acuerdo o a solicitud de LA PARTE DIVULGADORA, LA PARTE RECEPTORA deberá devolver o destruir toda la Información Confidencial recibida, incluyendo copias y documentos derivados.

SEXTA.- PROPIEDAD DE LA INFORMACIÓN
Toda la Información Confidencial seguirá siendo propiedad exclusiva de LA PARTE DIVULGADORA. Este acuerdo no otorga a LA PARTE RECEPTORA ningún derecho sobre dicha información.

SÉPTIMA.- REMEDIOS
En caso de incumplimiento, LA PARTE DIVULGADORA tendrá derecho a solicitar medidas cautelares y/o indemnización por daños y perjuicios.

{additional}{closing}.- JURISDICCIÓN
Para cualquier controversia, LAS PARTES se someten a los Juzgados y Tribunales de {city}.

Y en prueba de conformidad, firman el presente acuerdo por duplicado.


_____________________________              _____________________________
    LA PARTE DIVULGADORA                      LA PARTE RECEPTORA
    {signature_a}                         {signature_b}
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[PARTE DIVULGADORA]"),
        party_b = value_or(&fields.party_b, "[PARTE RECEPTORA]"),
        description = value_or(
            &fields.description,
            "• Información técnica, comercial, financiera o estratégica\n• Datos de clientes, proveedores y socios comerciales\n• Planes de negocio, marketing y desarrollo\n• Software, código fuente, algoritmos y especificaciones técnicas\n• Know-how, procesos, metodologías y procedimientos\n• Cualquier otra información designada como confidencial"
        ),
        duration = value_or(&fields.duration, "dos (2) años"),
        additional = additional,
        closing = closing,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn employment(fields: &ContractFields) -> String {
    let (additional, closing) = match non_empty(&fields.additional_clauses) {
        Some(clauses) => (
            format!("OCTAVA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
            "OCTAVA (CONT.)",
        ),
        None => (String::new(), "OCTAVA"),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                    CONTRATO DE TRABAJO
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

De una parte, {party_a}, con domicilio en [DIRECCIÓN], y CIF [CIF], representada por [REPRESENTANTE], en adelante "LA EMPRESA".

De otra parte, {party_b}, con DNI [DNI] y domicilio en [DIRECCIÓN], en adelante "EL TRABAJADOR".

                              MANIFIESTAN

Que LA EMPRESA desea contratar los servicios laborales de EL TRABAJADOR, quien acepta prestar sus servicios bajo las condiciones que se establecen en el presente contrato.

                             CLÁUSULAS

PRIMERA.- OBJETO
{description}

SEGUNDA.- DURACIÓN
El presente contrato tendrá una duración {duration}, comenzando a surtir efectos desde la fecha de su firma.

Se establece un período de prueba de [PERÍODO], durante el cual cualquiera de las partes podrá resolver el contrato sin necesidad de preaviso.

TERCERA.- JORNADA LABORAL
La jornada de trabajo será de [HORAS] horas semanales, distribuidas de [DÍA] a [DÍA], en horario de [HORARIO].

CUARTA.- RETRIBUCIÓN
EL TRABAJADOR percibirá una retribución bruta anual de {amount}, distribuida en [12/14] pagas.

QUINTA.- VACACIONES
EL TRABAJADOR tendrá derecho a [30] días naturales de vacaciones anuales retribuidas, o la parte proporcional en caso de no completar el año.

SEXTA.- OBLIGACIONES DEL TRABAJADOR
EL TRABAJADOR se compromete a:
a) Cumplir con las obligaciones de su puesto de trabajo con diligencia y buena fe.
b) Observar las medidas de seguridad e higiene establecidas.
c) Guardar confidencialidad sobre la información de LA EMPRESA.
d) No realizar competencia desleal.

SÉPTIMA.- PROTECCIÓN DE DATOS
LA EMPRESA tratará los datos personales de EL TRABAJADOR conforme a la normativa vigente en materia de protección de datos.

{additional}{closing}.- LEGISLACIÓN APLICABLE
El presente contrato se regirá por el Estatuto de los Trabajadores y demás normativa laboral aplicable.

Y en prueba de conformidad, firman el presente contrato por duplicado.


_____________________________              _____________________________
        LA EMPRESA                            EL TRABAJADOR
    {signature_a}                         {signature_b}
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[NOMBRE DE LA EMPRESA]"),
        party_b = value_or(&fields.party_b, "[NOMBRE DEL TRABAJADOR]"),
        description = value_or(
            &fields.description,
            "EL TRABAJADOR prestará sus servicios profesionales en el puesto de [PUESTO], realizando las funciones propias de dicha categoría profesional."
        ),
        duration = value_or(&fields.duration, "indefinida"),
        amount = value_or(&fields.amount, "[CANTIDAD]"),
        additional = additional,
        closing = closing,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn partnership(fields: &ContractFields) -> String {
    let additional = match non_empty(&fields.additional_clauses) {
        Some(clauses) => format!("NOVENA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
        None => String::new(),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                    CONTRATO DE SOCIOS
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

{party_a}, en adelante "SOCIO A".
{party_b}, en adelante "SOCIO B".

Conjuntamente denominados "LOS SOCIOS".

                              EXPONEN

Que LOS SOCIOS desean constituir una sociedad para {purpose}.

                             CLÁUSULAS

PRIMERA.- OBJETO SOCIAL
{object}

SEGUNDA.- CAPITAL Y PARTICIPACIONES
El capital social será de {amount}, distribuido de la siguiente manera:
• SOCIO A: [XX]%
• SOCIO B: [XX]%

TERCERA.- DURACIÓN
La sociedad tendrá una duración {duration}.

CUARTA.- ADMINISTRACIÓN
La administración será [solidaria/mancomunada]. Las decisiones estratégicas requerirán acuerdo unánime de LOS SOCIOS.

QUINTA.- REPARTO DE BENEFICIOS
Los beneficios se repartirán proporcionalmente a la participación de cada socio.

SEXTA.- DEDICACIÓN
Cada socio se compromete a dedicar [HORAS] horas semanales al proyecto.

SÉPTIMA.- NO COMPETENCIA
LOS SOCIOS se comprometen a no participar en negocios competidores durante la vigencia de este contrato.

OCTAVA.- RESOLUCIÓN DE CONFLICTOS
Los conflictos se resolverán mediante mediación. Si no hay acuerdo, se acudirá a arbitraje.

{additional}

_____________________________              _____________________________
        SOCIO A                                  SOCIO B
    {signature_a}                         {signature_b}
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[SOCIO 1]"),
        party_b = value_or(&fields.party_b, "[SOCIO 2]"),
        purpose = value_or(
            &fields.description,
            "desarrollar conjuntamente un proyecto empresarial"
        ),
        object = value_or(
            &fields.description,
            "La sociedad tendrá por objeto [DESCRIPCIÓN DEL NEGOCIO]."
        ),
        amount = value_or(&fields.amount, "[CANTIDAD]"),
        duration = value_or(&fields.duration, "indefinida"),
        additional = additional,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn rental(fields: &ContractFields) -> String {
    let additional = match non_empty(&fields.additional_clauses) {
        Some(clauses) => format!("OCTAVA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
        None => String::new(),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                CONTRATO DE ARRENDAMIENTO
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

De una parte, {party_a}, en adelante "EL ARRENDADOR".

De otra parte, {party_b}, en adelante "EL ARRENDATARIO".

                             CLÁUSULAS

PRIMERA.- OBJETO
EL ARRENDADOR cede en arrendamiento a EL ARRENDATARIO el inmueble situado en:
{description}

SEGUNDA.- DURACIÓN
El arrendamiento tendrá una duración de {duration}, desde [FECHA INICIO] hasta [FECHA FIN].

TERCERA.- RENTA
La renta mensual será de {amount}, pagadera dentro de los primeros cinco días de cada mes.

CUARTA.- FIANZA
EL ARRENDATARIO deposita la cantidad de [FIANZA] en concepto de fianza.

QUINTA.- USO
El inmueble se destinará exclusivamente a vivienda habitual.

SEXTA.- GASTOS
• Comunidad: [ARRENDADOR/ARRENDATARIO]
• Suministros: EL ARRENDATARIO
• IBI: EL ARRENDADOR

SÉPTIMA.- CONSERVACIÓN
EL ARRENDATARIO mantendrá el inmueble en buen estado.

{additional}

_____________________________              _____________________________
      EL ARRENDADOR                          EL ARRENDATARIO
    {signature_a}                         {signature_b}
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[ARRENDADOR]"),
        party_b = value_or(&fields.party_b, "[ARRENDATARIO]"),
        description = value_or(&fields.description, "[DIRECCIÓN COMPLETA DEL INMUEBLE]"),
        duration = value_or(&fields.duration, "[DURACIÓN]"),
        amount = value_or(&fields.amount, "[CANTIDAD]"),
        additional = additional,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn sale(fields: &ContractFields) -> String {
    let additional = match non_empty(&fields.additional_clauses) {
        Some(clauses) => format!("SEXTA.- CLÁUSULAS ADICIONALES\n{}\n\n", clauses),
        None => String::new(),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                CONTRATO DE COMPRAVENTA
═══════════════════════════════════════════════════════════════

En {city}, a {date}

                              REUNIDOS

De una parte, {party_a}, en adelante "EL VENDEDOR".

De otra parte, {party_b}, en adelante "EL COMPRADOR".

                             CLÁUSULAS

PRIMERA.- OBJETO
EL VENDEDOR vende a EL COMPRADOR, que acepta y adquiere:
{description}

SEGUNDA.- PRECIO
El precio de la compraventa es de {amount}.

TERCERA.- FORMA DE PAGO
[Describir forma de pago: contado, plazos, etc.]

CUARTA.- ENTREGA
La entrega se realizará {duration}.

QUINTA.- GARANTÍA
EL VENDEDOR garantiza que el bien está libre de cargas y gravámenes.

{additional}

_____________________________              _____________________________
        EL VENDEDOR                            EL COMPRADOR
    {signature_a}                         {signature_b}
"#,
        city = value_or(&fields.city, "[Ciudad]"),
        date = date_or_today(fields),
        party_a = value_or(&fields.party_a, "[VENDEDOR]"),
        party_b = value_or(&fields.party_b, "[COMPRADOR]"),
        description = value_or(&fields.description, "[DESCRIPCIÓN DETALLADA DEL BIEN]"),
        amount = value_or(&fields.amount, "[CANTIDAD]"),
        duration = value_or(
            &fields.duration,
            "en el momento de la firma del presente contrato"
        ),
        additional = additional,
        signature_a = value_or(&fields.party_a, "[Firma]"),
        signature_b = value_or(&fields.party_b, "[Firma]"),
    )
    .trim()
    .to_string()
}

fn terms(fields: &ContractFields) -> String {
    let additional = match non_empty(&fields.additional_clauses) {
        Some(clauses) => format!("10. CONDICIONES ADICIONALES\n{}", clauses),
        None => String::new(),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                TÉRMINOS Y CONDICIONES DE USO
═══════════════════════════════════════════════════════════════

Última actualización: {date}

Bienvenido a {site_name}

{description}

1. ACEPTACIÓN DE LOS TÉRMINOS
Al acceder y utilizar este sitio web, usted acepta estos términos y condiciones en su totalidad.

2. DESCRIPCIÓN DEL SERVICIO
{short_name} proporciona [DESCRIPCIÓN DEL SERVICIO].

3. REGISTRO Y CUENTA
• Debe proporcionar información veraz y actualizada.
• Es responsable de mantener la confidencialidad de su cuenta.
• Debe tener al menos 18 años para registrarse.

4. USO ACEPTABLE
Usted se compromete a NO:
• Usar el servicio para fines ilegales.
• Transmitir contenido dañino o malicioso.
• Intentar acceder a sistemas no autorizados.
• Violar derechos de propiedad intelectual.

5. PROPIEDAD INTELECTUAL
Todo el contenido de {short_name} está protegido por derechos de autor.

6. LIMITACIÓN DE RESPONSABILIDAD
El servicio se proporciona "tal cual". No garantizamos disponibilidad ininterrumpida.

7. PRIVACIDAD
El tratamiento de datos personales se rige por nuestra Política de Privacidad.

8. MODIFICACIONES
Nos reservamos el derecho de modificar estos términos en cualquier momento.

9. CONTACTO
Para cualquier consulta: {contact}

{additional}
"#,
        date = date_or_today(fields),
        site_name = value_or(&fields.party_a, "[NOMBRE DEL SITIO WEB/APP]"),
        description = value_or(
            &fields.description,
            "Estos términos y condiciones regulan el uso de nuestros servicios."
        ),
        short_name = value_or(&fields.party_a, "[NOMBRE]"),
        contact = value_or(&fields.party_b, "[EMAIL DE CONTACTO]"),
        additional = additional,
    )
    .trim()
    .to_string()
}

fn privacy(fields: &ContractFields) -> String {
    let additional = match non_empty(&fields.additional_clauses) {
        Some(clauses) => format!("10. INFORMACIÓN ADICIONAL\n{}", clauses),
        None => String::new(),
    };
    format!(
        r#"
═══════════════════════════════════════════════════════════════
                    POLÍTICA DE PRIVACIDAD
═══════════════════════════════════════════════════════════════

Última actualización: {date}

{company} ("nosotros", "nuestro") se compromete a proteger su privacidad.

1. INFORMACIÓN QUE RECOPILAMOS
{description}

2. CÓMO USAMOS SU INFORMACIÓN
Utilizamos sus datos para:
• Proporcionar nuestros servicios
• Mejorar la experiencia del usuario
• Enviar comunicaciones relevantes
• Cumplir obligaciones legales

3. BASE LEGAL
Procesamos sus datos basándonos en:
• Su consentimiento
• Ejecución de contrato
• Interés legítimo
• Obligación legal

4. COMPARTIR INFORMACIÓN
No vendemos sus datos. Podemos compartirlos con:
• Proveedores de servicios
• Autoridades (cuando sea requerido por ley)

5. SUS DERECHOS (RGPD)
Usted tiene derecho a:
• Acceder a sus datos
• Rectificar datos incorrectos
• Solicitar la eliminación
• Oponerse al procesamiento
• Portabilidad de datos

6. RETENCIÓN DE DATOS
Conservamos sus datos durante {retention} o según obligaciones legales.

7. SEGURIDAD
Implementamos medidas técnicas y organizativas para proteger sus datos.

8. COOKIES
Utilizamos cookies. Puede gestionar sus preferencias en la configuración de su navegador.

9. CONTACTO
Delegado de Protección de Datos: {dpo_contact}

{additional}
"#,
        date = date_or_today(fields),
        company = value_or(&fields.party_a, "[NOMBRE DE LA EMPRESA]"),
        description = value_or(
            &fields.description,
            "• Datos de identificación (nombre, email, teléfono)\n• Datos de navegación (IP, cookies, dispositivo)\n• Datos de transacciones"
        ),
        retention = value_or(&fields.duration, "[PERÍODO]"),
        dpo_contact = value_or(&fields.party_b, "[EMAIL DPO]"),
        additional = additional,
    )
    .trim()
    .to_string()
}
